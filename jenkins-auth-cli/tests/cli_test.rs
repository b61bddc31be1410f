//! Integration tests for the jenkins-auth binary.
//!
//! Every test points the binary at a temporary auth file with `--file` and
//! clears the Jenkins environment variables so the user's setup never leaks in.

use std::path::Path;

use assert_cmd::Command;
use jenkins_auth_core::{AuthEntry, CredentialStoreService};
use jenkins_auth_test_utils::{EnvTestGuard, SAMPLE_STORE_YAML, StoreFileGuard};
use predicates::prelude::*;

/// Build a command for the binary with a clean Jenkins environment
fn jenkins_auth() -> Command {
  let mut cmd = Command::cargo_bin("jenkins-auth").expect("binary should be built");
  for name in EnvTestGuard::JENKINS_VARS {
    cmd.env_remove(name);
  }
  cmd
}

/// Same as [`jenkins_auth`] but reading and writing `path`
fn jenkins_auth_with_file(path: &Path) -> Command {
  let mut cmd = jenkins_auth();
  cmd.arg("--file").arg(path);
  cmd
}

#[test]
fn test_help_lists_commands() {
  jenkins_auth()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("get"))
    .stdout(predicate::str::contains("set"))
    .stdout(predicate::str::contains("list"))
    .stdout(predicate::str::contains("check"));
}

#[test]
fn test_path_prints_override() {
  let guard = StoreFileGuard::empty();

  jenkins_auth_with_file(guard.path())
    .arg("path")
    .assert()
    .success()
    .stdout(predicate::str::contains(guard.path().display().to_string()));
}

#[test]
fn test_list_missing_file_is_empty() {
  let guard = StoreFileGuard::empty();

  jenkins_auth_with_file(guard.path())
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("No Jenkins servers stored"));

  assert!(!guard.path().exists());
}

#[test]
fn test_list_shows_servers_and_users() {
  let guard = StoreFileGuard::new(SAMPLE_STORE_YAML);

  jenkins_auth_with_file(guard.path())
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("https://jenkins.example.com"))
    .stdout(predicate::str::contains("alice"))
    .stdout(predicate::str::contains("bob"))
    .stdout(predicate::str::contains("https://ci.example.org"))
    .stdout(predicate::str::contains("bearer"));
}

#[test]
fn test_set_then_get() {
  let guard = StoreFileGuard::empty();

  jenkins_auth_with_file(guard.path())
    .args(["set", "https://ci.example.com", "--username", "bob", "--api-token", "tok-0123456789"])
    .assert()
    .success();

  jenkins_auth_with_file(guard.path())
    .args(["get", "https://ci.example.com", "--username", "bob"])
    .assert()
    .success()
    .stdout(predicate::str::contains("bob"))
    .stdout(predicate::str::contains("6789"))
    .stdout(predicate::str::contains("tok-0123456789").not());

  // The only entry for the server is returned without a username
  jenkins_auth_with_file(guard.path())
    .args(["get", "https://ci.example.com", "--show-secrets"])
    .assert()
    .success()
    .stdout(predicate::str::contains("tok-0123456789"));

  let content = guard.read();
  assert!(content.contains("apitoken: tok-0123456789"), "unexpected file content: {content}");

  let store = CredentialStoreService::new(guard.path()).load().unwrap();
  assert_eq!(
    store.find_auth("https://ci.example.com", "bob"),
    Some(&AuthEntry::with_api_token("bob", "tok-0123456789"))
  );
}

#[test]
fn test_set_replaces_existing_user() {
  let guard = StoreFileGuard::new(SAMPLE_STORE_YAML);

  jenkins_auth_with_file(guard.path())
    .args(["set", "https://jenkins.example.com", "-u", "alice", "--api-token", "rotated"])
    .assert()
    .success();

  let store = CredentialStoreService::new(guard.path()).load().unwrap();
  let auths = store.find_auths("https://jenkins.example.com");
  assert_eq!(auths.len(), 2);
  assert_eq!(auths[0], AuthEntry::with_api_token("alice", "rotated"));
  assert_eq!(store.servers.len(), 2);
}

#[test]
fn test_set_from_env() {
  let guard = StoreFileGuard::empty();

  jenkins_auth_with_file(guard.path())
    .args(["set", "https://ci.example.com", "--from-env"])
    .env("JENKINS_BEARER_TOKEN", "env-bearer")
    .assert()
    .success();

  let store = CredentialStoreService::new(guard.path()).load().unwrap();
  assert_eq!(
    store.find_auth("https://ci.example.com", ""),
    Some(&AuthEntry::with_bearer_token("env-bearer"))
  );
}

#[test]
fn test_set_refuses_invalid_credentials() {
  let guard = StoreFileGuard::empty();

  jenkins_auth_with_file(guard.path())
    .args(["set", "https://ci.example.com", "--username", "bob"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("bearer token"));

  assert!(!guard.path().exists());
}

#[test]
fn test_get_ambiguous_requires_username() {
  let guard = StoreFileGuard::new(SAMPLE_STORE_YAML);

  jenkins_auth_with_file(guard.path())
    .args(["get", "https://jenkins.example.com"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--username"));
}

#[test]
fn test_get_unknown_server_fails() {
  let guard = StoreFileGuard::new(SAMPLE_STORE_YAML);

  jenkins_auth_with_file(guard.path())
    .args(["get", "https://jenkins.example.com/", "--username", "alice"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No credentials stored"));
}

#[test]
fn test_get_reports_parse_errors() {
  let guard = StoreFileGuard::new("servers: {url: [\n");

  jenkins_auth_with_file(guard.path())
    .args(["get", "https://jenkins.example.com"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to parse YAML file"));
}

#[test]
fn test_check_without_environment_fails() {
  jenkins_auth().arg("check").assert().failure();
}

#[test]
fn test_check_with_api_token() {
  jenkins_auth()
    .arg("check")
    .env("JENKINS_USERNAME", "alice")
    .env("JENKINS_API_TOKEN", "abc123")
    .assert()
    .success()
    .stdout(predicate::str::contains("api-token"));
}

#[test]
fn test_get_header_for_api_token() {
  let guard = StoreFileGuard::new(SAMPLE_STORE_YAML);

  // alice:abc123
  jenkins_auth_with_file(guard.path())
    .args(["get", "https://jenkins.example.com", "--username", "alice", "--header"])
    .assert()
    .success()
    .stdout(predicate::str::diff("Basic YWxpY2U6YWJjMTIz\n"));
}

#[test]
fn test_get_header_for_bearer_token() {
  let guard = StoreFileGuard::new(SAMPLE_STORE_YAML);

  jenkins_auth_with_file(guard.path())
    .args(["get", "https://ci.example.org", "--header"])
    .assert()
    .success()
    .stdout(predicate::str::diff("Bearer bearer-token-value\n"));
}

#[test]
fn test_get_header_for_incomplete_entry_fails() {
  let guard = StoreFileGuard::new(
    r#"servers:
  - url: https://ci.example.com
    auths:
      - username: bob
"#,
  );

  jenkins_auth_with_file(guard.path())
    .args(["get", "https://ci.example.com", "--header"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("incomplete"));
}

#[test]
fn test_get_server_without_auths_warns() {
  let guard = StoreFileGuard::new("servers:\n  - url: https://ci.example.com\n    auths: []\n");

  jenkins_auth_with_file(guard.path())
    .args(["get", "https://ci.example.com"])
    .assert()
    .failure()
    .stdout(predicate::str::contains("stored without any credentials"))
    .stderr(predicate::str::contains("No credentials stored"));
}
