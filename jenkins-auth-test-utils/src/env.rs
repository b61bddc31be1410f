//! Environment variable management for testing
//!
//! This module provides utilities for managing environment variables during
//! testing to ensure tests don't interfere with each other.

use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

/// Serializes every test that mutates the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A test environment that overrides `XDG_CONFIG_HOME` to use a per-test
/// temporary directory and clears the Jenkins credential variables.
pub struct EnvTestGuard {
  /// The temporary directory that will be used for XDG directories
  temp_dir: TempDir,
  /// Original values of every variable touched by the guard
  originals: Vec<(&'static str, Option<String>)>,
  /// Held for the lifetime of the guard; released after `drop` restores
  _lock: MutexGuard<'static, ()>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  /// XDG environment variable name
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";
  /// Jenkins credential variables cleared by the guard
  pub const JENKINS_VARS: [&'static str; 3] = ["JENKINS_USERNAME", "JENKINS_API_TOKEN", "JENKINS_BEARER_TOKEN"];

  /// Create a new test environment with an overridden config directory
  pub fn new() -> Self {
    // A test that panicked while holding the lock still restored the environment
    let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    // Save original environment variables
    let originals = std::iter::once(Self::XDG_CONFIG_HOME)
      .chain(Self::JENKINS_VARS)
      .map(|name| (name, env::var(name).ok()))
      .collect();

    let config_home = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_home).expect("Failed to create config directory");

    unsafe {
      env::set_var(Self::XDG_CONFIG_HOME, &config_home);
      for name in Self::JENKINS_VARS {
        env::remove_var(name);
      }
    }

    Self {
      temp_dir,
      originals,
      _lock: lock,
    }
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    // Restore original environment variables
    for (name, original) in &self.originals {
      match original {
        Some(val) => unsafe {
          env::set_var(name, val);
        },
        None => unsafe {
          env::remove_var(name);
        },
      }
    }
  }
}
