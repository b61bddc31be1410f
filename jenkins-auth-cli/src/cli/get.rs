//! # Get Command
//!
//! Looks up the credentials stored for a Jenkins server.

use anyhow::{Context, Result, bail};
use clap::Args;
use jenkins_auth_core::output::{auth_kind, format_url, mask_secret};
use jenkins_auth_core::{AuthEntry, print_warning};
use tracing::debug;

use super::GlobalOptions;

/// Arguments for the get command
#[derive(Args)]
pub struct GetArgs {
  /// Jenkins server URL, matched exactly
  pub url: String,

  /// Username to look up (required when several users are stored)
  #[arg(short, long, default_value = "")]
  pub username: String,

  /// Print tokens in clear text
  #[arg(long)]
  pub show_secrets: bool,

  /// Print only the Authorization header value for the entry
  #[arg(long, conflicts_with = "show_secrets")]
  pub header: bool,
}

/// Handle the get command
pub(crate) fn handle_get_command(options: &GlobalOptions, args: GetArgs) -> Result<()> {
  let service = options.store_service()?;
  let store = service.load()?;

  let Some(auth) = store.find_auth(&args.url, &args.username) else {
    let known = store.find_auths(&args.url).len();
    debug!("{} auth(s) stored for {}", known, args.url);
    if known == 0 && store.servers.iter().any(|server| server.url == args.url) {
      print_warning(&format!("Server {} is stored without any credentials.", format_url(&args.url)));
    }
    if args.username.is_empty() && known > 1 {
      bail!(
        "{known} users are stored for {}; pick one with --username",
        args.url
      );
    }
    if args.username.is_empty() {
      bail!("No credentials stored for {}", args.url);
    }
    bail!("No credentials stored for {} on {}", args.username, args.url);
  };

  if args.header {
    let header = auth
      .authorization_header()
      .with_context(|| format!("Stored credentials for {} are incomplete", args.url))?;
    println!("{header}");
    return Ok(());
  }

  print_auth(&args.url, auth, args.show_secrets);
  Ok(())
}

fn print_auth(url: &str, auth: &AuthEntry, show_secrets: bool) {
  let reveal = |secret: &str| {
    if show_secrets {
      secret.to_string()
    } else {
      mask_secret(secret)
    }
  };

  println!("{}", format_url(url));
  println!("  username:     {}", auth.username);
  println!("  api token:    {}", reveal(&auth.api_token));
  println!("  bearer token: {}", reveal(&auth.bearer_token));
  println!("  kind:         {}", auth_kind(auth));
}
