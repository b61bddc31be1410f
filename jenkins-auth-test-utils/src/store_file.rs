use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// An auth file holding two servers, one with two users
pub const SAMPLE_STORE_YAML: &str = r#"servers:
  - url: "https://jenkins.example.com"
    auths:
      - username: "alice"
        apitoken: "abc123"
        bearertoken: ""
      - username: "bob"
        apitoken: "def456"
        bearertoken: ""
  - url: "https://ci.example.org"
    auths:
      - username: ""
        apitoken: ""
        bearertoken: "bearer-token-value"
"#;

/// RAII guard for test auth files
///
/// This struct creates a temporary directory holding an auth file with the
/// given content. The directory and the file are removed when dropped.
pub struct StoreFileGuard {
  #[allow(dead_code)]
  temp_dir: TempDir,
  path: PathBuf,
}

impl StoreFileGuard {
  /// Create a new StoreFileGuard with the given content
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("jenkinsAuth.yaml");

    let mut file = fs::File::create(&path).expect("Failed to create test auth file");
    file.write_all(content.as_bytes()).expect("Failed to write test auth file");

    Self { temp_dir, path }
  }

  /// Create a guard whose auth file does not exist yet
  pub fn empty() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("jenkinsAuth.yaml");

    Self { temp_dir, path }
  }

  /// Get the path to the auth file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Read the current content of the auth file
  pub fn read(&self) -> String {
    fs::read_to_string(&self.path).expect("Failed to read test auth file")
  }
}
