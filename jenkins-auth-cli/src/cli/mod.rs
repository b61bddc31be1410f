//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the jenkins-auth tool.

mod check;
mod get;
mod list;
mod set;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use jenkins_auth_core::output::format_path;
use jenkins_auth_core::{ColorMode, CredentialStoreService, get_config_dirs};
use tracing::debug;

/// Top-level CLI command for the jenkins-auth tool
#[derive(Parser)]
#[command(name = "jenkins-auth")]
#[command(about = "Manage stored Jenkins server credentials")]
#[command(
  long_about = "Stores the usernames, API tokens and bearer tokens used to talk to Jenkins\n\
        servers in a local YAML file, and looks them up by server URL and username."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Auth file to use instead of the one in the config directory
  #[arg(long, value_name = "PATH", global = true)]
  pub file: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the jenkins-auth tool
#[derive(Subcommand)]
pub enum Commands {
  /// Check the credentials provided through the environment
  #[command(long_about = "Builds credentials from JENKINS_USERNAME, JENKINS_API_TOKEN and\n\
            JENKINS_BEARER_TOKEN and reports whether they are usable. Credentials are\n\
            usable with a bearer token, or with both a username and an API token.")]
  Check,

  /// Show the stored credentials for a server
  #[command(long_about = "Looks up the credentials stored for a Jenkins server URL.\n\n\
            URLs must match exactly. Without --username the server's only entry is shown;\n\
            if several users are stored for the server one must be picked explicitly.")]
  Get(get::GetArgs),

  /// List all stored servers and users
  #[command(alias = "ls")]
  List,

  /// Print the path of the auth file
  Path,

  /// Store credentials for a server
  #[command(long_about = "Adds or replaces the credentials for a user on a Jenkins server.\n\n\
            An existing entry with the same username is overwritten, otherwise the entry\n\
            is added. Use --from-env to start from the JENKINS_* environment variables;\n\
            explicit flags take precedence over the environment.")]
  Set(set::SetArgs),
}

/// Options shared by every command
pub(crate) struct GlobalOptions {
  pub file: Option<PathBuf>,
}

impl GlobalOptions {
  /// True when the auth file lives in the default config directory
  pub fn uses_default_location(&self) -> bool {
    self.file.is_none()
  }

  /// Build the store service for the selected auth file
  pub fn store_service(&self) -> Result<CredentialStoreService> {
    match &self.file {
      Some(path) => Ok(CredentialStoreService::new(path)),
      None => CredentialStoreService::default_location(),
    }
  }

  /// Create the default config directory so the auth file can be written
  pub fn ensure_config_dir(&self) -> Result<()> {
    if self.uses_default_location() {
      get_config_dirs()?.init()?;
    }
    Ok(())
  }
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let options = GlobalOptions { file: cli.file };
  debug!("Using auth file override: {:?}", options.file);

  match cli.command {
    Commands::Check => check::handle_check_command(),
    Commands::Get(args) => get::handle_get_command(&options, args),
    Commands::List => list::handle_list_command(&options),
    Commands::Path => handle_path_command(&options),
    Commands::Set(args) => set::handle_set_command(&options, args),
  }
}

fn handle_path_command(options: &GlobalOptions) -> Result<()> {
  let service = options.store_service()?;
  println!("{}", format_path(&service.file_name().display().to_string()));
  Ok(())
}
