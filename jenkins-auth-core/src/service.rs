//! # Credential Store Service
//!
//! Loads and saves a [`CredentialStore`] from a single file. A missing file is
//! treated as an empty store so that the first run needs no setup. Writes
//! truncate the file in place and are not atomic.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::{StoreCodec, YamlCodec};
use crate::config::ConfigDirs;
use crate::consts::DEFAULT_WRITE_PERMISSIONS;
use crate::error::StoreError;
use crate::store::CredentialStore;

/// Reads and writes the auth file through a [`StoreCodec`]
pub struct CredentialStoreService {
  file_name: PathBuf,
  codec: Box<dyn StoreCodec>,
}

impl CredentialStoreService {
  /// Create a service for `file_name` using the YAML format.
  ///
  /// An empty `file_name` is allowed: loading then yields an empty store and
  /// saving fails with [`StoreError::Config`].
  pub fn new(file_name: impl Into<PathBuf>) -> Self {
    Self::with_codec(file_name, YamlCodec)
  }

  /// Create a service for `file_name` using a custom codec
  pub fn with_codec(file_name: impl Into<PathBuf>, codec: impl StoreCodec + 'static) -> Self {
    Self {
      file_name: file_name.into(),
      codec: Box::new(codec),
    }
  }

  /// Create a service for the auth file in the user's config directory
  pub fn default_location() -> anyhow::Result<Self> {
    let config_dirs = ConfigDirs::new()?;
    Ok(Self::new(config_dirs.auth_file_path()))
  }

  /// Path of the backing file
  pub fn file_name(&self) -> &Path {
    &self.file_name
  }

  fn has_file_name(&self) -> bool {
    !self.file_name.as_os_str().is_empty()
  }

  /// Load the store from disk.
  ///
  /// # Errors
  ///
  /// Returns [`StoreError::Read`] if the file exists but cannot be read and
  /// [`StoreError::Parse`] if its content cannot be decoded.
  pub fn load(&self) -> Result<CredentialStore, StoreError> {
    if !self.has_file_name() {
      debug!("No auth file configured, starting from an empty store");
      return Ok(CredentialStore::default());
    }

    let path = &self.file_name;
    let exists = path.try_exists().map_err(|source| StoreError::Read {
      path: path.clone(),
      source,
    })?;
    if !exists {
      debug!("Auth file {} does not exist yet", path.display());
      return Ok(CredentialStore::default());
    }

    let data = fs::read(path).map_err(|source| StoreError::Read {
      path: path.clone(),
      source,
    })?;
    let store = self.codec.decode(&data).map_err(|source| StoreError::Parse {
      path: path.clone(),
      format: self.codec.name(),
      source,
    })?;

    debug!("Loaded {} server(s) from {}", store.servers.len(), path.display());
    Ok(store)
  }

  /// Save the store to disk, creating or truncating the file.
  ///
  /// # Errors
  ///
  /// Returns [`StoreError::Config`] when no file name is set,
  /// [`StoreError::Encode`] if the store cannot be encoded and
  /// [`StoreError::Write`] if the filesystem write fails.
  pub fn save(&self, store: &CredentialStore) -> Result<(), StoreError> {
    if !self.has_file_name() {
      return Err(StoreError::Config("no filename defined for the auth file".to_string()));
    }

    let data = self.codec.encode(store).map_err(|source| StoreError::Encode {
      format: self.codec.name(),
      source,
    })?;

    let path = &self.file_name;
    write_restricted(path, &data).map_err(|source| StoreError::Write {
      path: path.clone(),
      source,
    })?;

    debug!("Saved {} server(s) to {}", store.servers.len(), path.display());
    Ok(())
  }
}

/// Write `data` to `path` readable only by the owner and their group
fn write_restricted(path: &Path, data: &[u8]) -> io::Result<()> {
  let mut options = OpenOptions::new();
  options.write(true).create(true).truncate(true);

  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(DEFAULT_WRITE_PERMISSIONS);
  }

  let mut file = options.open(path)?;
  file.write_all(data)?;

  // The creation mode is subject to umask, and an existing file keeps its mode
  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(DEFAULT_WRITE_PERMISSIONS))?;
  }

  Ok(())
}
