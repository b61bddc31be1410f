//! # List Command
//!
//! Shows every stored server together with its users.

use anyhow::Result;
use jenkins_auth_core::output::{auth_kind, format_path};
use jenkins_auth_core::print_info;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::GlobalOptions;

#[derive(Tabled)]
struct AuthRow {
  #[tabled(rename = "Server")]
  url: String,
  #[tabled(rename = "Username")]
  username: String,
  #[tabled(rename = "Auth")]
  kind: String,
}

/// Handle the list command
pub(crate) fn handle_list_command(options: &GlobalOptions) -> Result<()> {
  let service = options.store_service()?;
  let store = service.load()?;

  if store.is_empty() {
    print_info(&format!(
      "No Jenkins servers stored in {}",
      format_path(&service.file_name().display().to_string())
    ));
    return Ok(());
  }

  let mut rows = Vec::new();
  for server in &store.servers {
    if server.auths.is_empty() {
      rows.push(AuthRow {
        url: server.url.clone(),
        username: "-".to_string(),
        kind: "none".to_string(),
      });
    }
    for auth in &server.auths {
      rows.push(AuthRow {
        url: server.url.clone(),
        username: if auth.username.is_empty() {
          "-".to_string()
        } else {
          auth.username.clone()
        },
        kind: auth_kind(auth).to_string(),
      });
    }
  }

  let mut table = Table::new(rows);
  table.with(Style::rounded());
  println!("{table}");
  Ok(())
}
