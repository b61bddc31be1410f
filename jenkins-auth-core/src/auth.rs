//! # Auth Entries
//!
//! A single set of credentials for one Jenkins server, either a bearer token
//! or a username paired with an API token.

use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::consts::{ENV_API_TOKEN, ENV_BEARER_TOKEN, ENV_USERNAME};
use crate::store::null_as_default;

/// One credential set for a Jenkins server
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEntry {
  #[serde(deserialize_with = "null_as_default")]
  pub username: String,
  #[serde(rename = "apitoken", deserialize_with = "null_as_default")]
  pub api_token: String,
  #[serde(rename = "bearertoken", deserialize_with = "null_as_default")]
  pub bearer_token: String,
}

impl AuthEntry {
  /// Create an entry authenticating with a username and API token
  pub fn with_api_token(username: impl Into<String>, api_token: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      api_token: api_token.into(),
      bearer_token: String::new(),
    }
  }

  /// Create an entry authenticating with a bearer token only
  pub fn with_bearer_token(bearer_token: impl Into<String>) -> Self {
    Self {
      bearer_token: bearer_token.into(),
      ..Default::default()
    }
  }

  /// Build an entry from `JENKINS_USERNAME`, `JENKINS_API_TOKEN` and
  /// `JENKINS_BEARER_TOKEN`, resolved through `lookup`.
  ///
  /// Unset variables become empty strings. No validation happens here; use
  /// [`AuthEntry::is_invalid`] to decide whether the result is usable.
  ///
  /// # Examples
  ///
  /// ```
  /// use std::collections::HashMap;
  ///
  /// use jenkins_auth_core::AuthEntry;
  ///
  /// let env = HashMap::from([("JENKINS_BEARER_TOKEN", "s3cr3t")]);
  /// let auth = AuthEntry::from_environment(|key| env.get(key).map(|v| v.to_string()));
  /// assert_eq!(auth.bearer_token, "s3cr3t");
  /// assert!(auth.username.is_empty());
  /// ```
  pub fn from_environment<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    Self {
      username: lookup(ENV_USERNAME).unwrap_or_default(),
      api_token: lookup(ENV_API_TOKEN).unwrap_or_default(),
      bearer_token: lookup(ENV_BEARER_TOKEN).unwrap_or_default(),
    }
  }

  /// Build an entry from the current process environment
  pub fn from_process_env() -> Self {
    Self::from_environment(|key| std::env::var(key).ok())
  }

  /// True when the entry carries neither a bearer token nor a complete
  /// username and API token pair.
  pub fn is_invalid(&self) -> bool {
    self.bearer_token.is_empty() && (self.api_token.is_empty() || self.username.is_empty())
  }

  /// Value for the `Authorization` header when talking to Jenkins.
  ///
  /// A bearer token takes precedence over the username/API token pair.
  /// Returns `None` for invalid entries.
  pub fn authorization_header(&self) -> Option<String> {
    if !self.bearer_token.is_empty() {
      return Some(format!("Bearer {}", self.bearer_token));
    }
    if self.is_invalid() {
      return None;
    }

    let combined = format!("{}:{}", self.username, self.api_token);
    let encoded = base64::engine::general_purpose::STANDARD.encode(combined);
    Some(format!("Basic {encoded}"))
  }
}

fn redact(secret: &str) -> &'static str {
  if secret.is_empty() { "" } else { "***" }
}

// Tokens never show up in logs
impl fmt::Debug for AuthEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AuthEntry")
      .field("username", &self.username)
      .field("api_token", &redact(&self.api_token))
      .field("bearer_token", &redact(&self.bearer_token))
      .finish()
  }
}
