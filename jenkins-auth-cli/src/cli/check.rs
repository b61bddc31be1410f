//! # Check Command
//!
//! Reports whether the credentials provided through the environment can be
//! used to authenticate.

use anyhow::{Result, bail};
use jenkins_auth_core::consts::{ENV_API_TOKEN, ENV_BEARER_TOKEN, ENV_USERNAME};
use jenkins_auth_core::output::{auth_kind, format_command};
use jenkins_auth_core::{AuthEntry, print_info, print_success};
use tracing::debug;

/// Handle the check command
pub(crate) fn handle_check_command() -> Result<()> {
  let auth = AuthEntry::from_process_env();
  debug!("Environment credentials: {:?}", auth);

  if auth.is_invalid() {
    print_info(&format!(
      "Set {} or both {} and {}.",
      format_command(ENV_BEARER_TOKEN),
      format_command(ENV_USERNAME),
      format_command(ENV_API_TOKEN)
    ));
    bail!("Environment does not provide usable Jenkins credentials");
  }

  print_success(&format!("Environment provides usable Jenkins credentials ({}).", auth_kind(&auth)));
  Ok(())
}
