//! # Jenkins Auth Core Library
//!
//! Core library for the `jenkins-auth` tool. It models the Jenkins servers a
//! user talks to together with the credentials known for each of them, and
//! persists that model to a YAML file in the user's configuration directory.

pub mod auth;
pub mod codec;
pub mod config;
pub mod consts;
pub mod error;
pub mod output;
pub mod service;
pub mod store;

// Re-export main types for the CLI and other consumers
pub use auth::AuthEntry;
pub use codec::{CodecError, JsonCodec, StoreCodec, YamlCodec};
pub use config::{ConfigDirs, get_config_dirs};
pub use error::StoreError;
pub use output::{ColorMode, print_info, print_success, print_warning};
pub use service::CredentialStoreService;
pub use store::{CredentialStore, ServerRecord};
