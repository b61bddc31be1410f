use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::CodecError;

/// Errors raised while loading or saving the auth file
#[derive(Debug, Error)]
pub enum StoreError {
  /// The file exists but could not be read
  #[error("failed to load file {} due to {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  /// The file content is not a valid store
  #[error("failed to parse {format} file {} due to {source}", .path.display())]
  Parse {
    path: PathBuf,
    format: &'static str,
    #[source]
    source: CodecError,
  },
  /// A required parameter was not provided
  #[error("{0}")]
  Config(String),
  /// The store could not be serialized
  #[error("failed to encode credential store as {format}: {source}")]
  Encode {
    format: &'static str,
    #[source]
    source: CodecError,
  },
  /// Writing the file failed
  #[error("failed to write file {} due to {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}
