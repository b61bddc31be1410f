//! # Configuration Management
//!
//! Resolves where the auth file lives, following the XDG base directory
//! conventions on Linux and the platform defaults elsewhere.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::consts::AUTH_FILE_NAME;

/// Represents the configuration directories for the jenkins-auth tool
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs =
      ProjectDirs::from("jenkins-x", "", "jenkins-auth").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Create the config directory if it doesn't exist
  pub fn init(&self) -> Result<()> {
    fs::create_dir_all(&self.config_dir)
      .with_context(|| format!("Failed to create config directory {}", self.config_dir.display()))
  }

  /// Get the path to the auth file
  pub fn auth_file_path(&self) -> PathBuf {
    self.config_dir.join(AUTH_FILE_NAME)
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_auth_file_path() {
    let config_dirs = ConfigDirs::new().unwrap();
    let auth_path = config_dirs.auth_file_path();

    assert!(auth_path.ends_with(AUTH_FILE_NAME));
    assert!(auth_path.starts_with(config_dirs.config_dir()));
  }

  #[test]
  #[cfg(target_os = "linux")]
  fn test_config_dir_follows_xdg_config_home() {
    let env = jenkins_auth_test_utils::EnvTestGuard::new();

    let config_dirs = get_config_dirs().unwrap();

    assert_eq!(config_dirs.config_dir(), &env.config_dir().join("jenkins-auth"));
  }

  #[test]
  #[cfg(target_os = "linux")]
  fn test_init_creates_config_dir() {
    let _env = jenkins_auth_test_utils::EnvTestGuard::new();
    let config_dirs = ConfigDirs::new().unwrap();

    config_dirs.init().unwrap();

    assert!(config_dirs.config_dir().is_dir());
  }
}
