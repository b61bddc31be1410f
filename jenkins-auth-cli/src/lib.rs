//! # Jenkins Auth CLI Library
//!
//! Command tree and handlers for the `jenkins-auth` tool, which manages the
//! Jenkins credentials stored in the user's auth file.

pub mod cli;
