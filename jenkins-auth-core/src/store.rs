//! # Credential Store
//!
//! In-memory model of the auth file: a list of Jenkins servers, each with the
//! auth entries known for it. Lookups are linear scans on exact string
//! matches; URLs are never normalized.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::trace;

use crate::auth::AuthEntry;

/// One Jenkins server and every credential known for it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerRecord {
  #[serde(deserialize_with = "null_as_default")]
  pub url: String,
  #[serde(deserialize_with = "null_as_default")]
  pub auths: Vec<AuthEntry>,
}

/// Root of the auth file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialStore {
  #[serde(deserialize_with = "null_as_default")]
  pub servers: Vec<ServerRecord>,
}

impl CredentialStore {
  /// Create an empty store
  pub fn new() -> Self {
    Self::default()
  }

  /// Auth entries of the first server whose URL equals `server_url`.
  ///
  /// Returns an empty slice when no server matches.
  pub fn find_auths(&self, server_url: &str) -> &[AuthEntry] {
    self
      .servers
      .iter()
      .find(|server| server.url == server_url)
      .map(|server| server.auths.as_slice())
      .unwrap_or_default()
  }

  /// Find the auth entry for `username` on `server_url`.
  ///
  /// With an empty `username` the sole entry for the server is returned, and
  /// `None` when there are zero or several entries to choose from.
  pub fn find_auth(&self, server_url: &str, username: &str) -> Option<&AuthEntry> {
    let auths = self.find_auths(server_url);
    if username.is_empty() {
      return match auths {
        [only] => Some(only),
        _ => None,
      };
    }
    auths.iter().find(|auth| auth.username == username)
  }

  /// Insert or replace the entry for `auth.username` on `url`.
  ///
  /// Only the first server with a matching URL is updated. Servers sharing a
  /// URL are never merged.
  pub fn set_auth(&mut self, url: &str, auth: AuthEntry) {
    match self.servers.iter_mut().find(|server| server.url == url) {
      Some(server) => match server.auths.iter_mut().find(|a| a.username == auth.username) {
        Some(existing) => {
          trace!("Replacing auth for {} on {}", auth.username, url);
          *existing = auth;
        }
        None => {
          trace!("Adding auth for {} on {}", auth.username, url);
          server.auths.push(auth);
        }
      },
      None => {
        trace!("Adding server {}", url);
        self.servers.push(ServerRecord {
          url: url.to_string(),
          auths: vec![auth],
        });
      }
    }
  }

  /// True when the store holds no servers
  pub fn is_empty(&self) -> bool {
    self.servers.is_empty()
  }
}

/// Deserialize an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
