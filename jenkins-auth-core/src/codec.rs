//! # Store Codecs
//!
//! Encoding and decoding of a [`CredentialStore`] to and from bytes. The file
//! service only talks to the [`StoreCodec`] trait, so the on-disk format can
//! change without touching lookup or mutation logic.

use thiserror::Error;

use crate::store::CredentialStore;

/// Errors raised while encoding or decoding a store
#[derive(Debug, Error)]
pub enum CodecError {
  #[error(transparent)]
  Yaml(#[from] serde_yaml::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

/// Serialization boundary for the auth file
pub trait StoreCodec {
  /// Short name of the format, used in log and error messages
  fn name(&self) -> &'static str;

  /// Decode a store from raw file contents
  fn decode(&self, bytes: &[u8]) -> Result<CredentialStore, CodecError>;

  /// Encode a store into file contents
  fn encode(&self, store: &CredentialStore) -> Result<Vec<u8>, CodecError>;
}

/// True for input that holds no document at all
fn is_blank(bytes: &[u8]) -> bool {
  bytes.iter().all(u8::is_ascii_whitespace)
}

/// YAML codec, the default format of the auth file
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl StoreCodec for YamlCodec {
  fn name(&self) -> &'static str {
    "YAML"
  }

  fn decode(&self, bytes: &[u8]) -> Result<CredentialStore, CodecError> {
    if is_blank(bytes) {
      return Ok(CredentialStore::default());
    }
    Ok(serde_yaml::from_slice(bytes)?)
  }

  fn encode(&self, store: &CredentialStore) -> Result<Vec<u8>, CodecError> {
    Ok(serde_yaml::to_string(store)?.into_bytes())
  }
}

/// JSON codec using the same field names as the YAML format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl StoreCodec for JsonCodec {
  fn name(&self) -> &'static str {
    "JSON"
  }

  fn decode(&self, bytes: &[u8]) -> Result<CredentialStore, CodecError> {
    if is_blank(bytes) {
      return Ok(CredentialStore::default());
    }
    Ok(serde_json::from_slice(bytes)?)
  }

  fn encode(&self, store: &CredentialStore) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec_pretty(store)?)
  }
}
