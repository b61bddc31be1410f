//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for user-facing messages and terminal output.

use owo_colors::OwoColorize;
use {clap, emojis};

use crate::auth::AuthEntry;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode as the global owo-colors override
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      // Leave detection to owo-colors
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Format a file path
pub fn format_path(path: &str) -> String {
  path.bright_green().to_string()
}

/// Format a Jenkins server URL
pub fn format_url(url: &str) -> String {
  url.bright_cyan().bold().to_string()
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  cmd.purple().to_string()
}

/// Mask a secret for display, keeping the last four characters of long values
pub fn mask_secret(secret: &str) -> String {
  let count = secret.chars().count();
  if count == 0 {
    return String::new();
  }
  if count <= 8 {
    return "*".repeat(count);
  }
  let tail: String = secret.chars().skip(count - 4).collect();
  format!("{}{tail}", "*".repeat(count - 4))
}

/// Short description of how an entry authenticates
pub fn auth_kind(auth: &AuthEntry) -> &'static str {
  if !auth.bearer_token.is_empty() {
    "bearer"
  } else if auth.is_invalid() {
    "invalid"
  } else {
    "api-token"
  }
}
