//! # Set Command
//!
//! Adds or replaces the credentials for a user on a Jenkins server.

use anyhow::{Context, Result, bail};
use clap::Args;
use jenkins_auth_core::output::{format_path, format_url};
use jenkins_auth_core::{AuthEntry, print_success};
use tracing::info;

use super::GlobalOptions;

/// Arguments for the set command
#[derive(Args)]
pub struct SetArgs {
  /// Jenkins server URL, stored exactly as given
  pub url: String,

  /// Username the API token belongs to
  #[arg(short, long)]
  pub username: Option<String>,

  /// API token for the user
  #[arg(long)]
  pub api_token: Option<String>,

  /// Bearer token, usable without a username
  #[arg(long)]
  pub bearer_token: Option<String>,

  /// Start from JENKINS_USERNAME, JENKINS_API_TOKEN and JENKINS_BEARER_TOKEN
  #[arg(long)]
  pub from_env: bool,
}

impl SetArgs {
  /// Build the entry to store, letting explicit flags override the environment
  fn to_auth<F>(&self, lookup: F) -> AuthEntry
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut auth = if self.from_env {
      AuthEntry::from_environment(lookup)
    } else {
      AuthEntry::default()
    };

    if let Some(username) = &self.username {
      auth.username = username.clone();
    }
    if let Some(api_token) = &self.api_token {
      auth.api_token = api_token.clone();
    }
    if let Some(bearer_token) = &self.bearer_token {
      auth.bearer_token = bearer_token.clone();
    }
    auth
  }
}

/// Handle the set command
pub(crate) fn handle_set_command(options: &GlobalOptions, args: SetArgs) -> Result<()> {
  let auth = args.to_auth(|key| std::env::var(key).ok());
  if auth.is_invalid() {
    bail!("Credentials need a bearer token, or both a username and an API token");
  }

  let service = options.store_service()?;
  let mut store = service.load()?;

  let username = auth.username.clone();
  store.set_auth(&args.url, auth);

  options.ensure_config_dir()?;
  service
    .save(&store)
    .with_context(|| format!("Failed to store credentials for {}", args.url))?;

  info!("Stored credentials for {:?} on {}", username, args.url);
  print_success(&format!(
    "Stored credentials for {} in {}",
    format_url(&args.url),
    format_path(&service.file_name().display().to_string())
  ));
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn args(from_env: bool) -> SetArgs {
    SetArgs {
      url: "https://ci.example.com".to_string(),
      username: None,
      api_token: None,
      bearer_token: None,
      from_env,
    }
  }

  #[test]
  fn test_to_auth_from_flags_only() {
    let mut set_args = args(false);
    set_args.username = Some("alice".to_string());
    set_args.api_token = Some("abc".to_string());

    let auth = set_args.to_auth(|_| Some("ignored".to_string()));

    assert_eq!(auth, AuthEntry::with_api_token("alice", "abc"));
  }

  #[test]
  fn test_to_auth_flags_override_environment() {
    let env = HashMap::from([
      ("JENKINS_USERNAME", "env-user"),
      ("JENKINS_API_TOKEN", "env-token"),
    ]);
    let mut set_args = args(true);
    set_args.api_token = Some("flag-token".to_string());

    let auth = set_args.to_auth(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(auth, AuthEntry::with_api_token("env-user", "flag-token"));
  }
}
