//! Auth token (login session) commands.

use clap::Subcommand;
use console::style;

use gt_api::ApiClient;
use gt_core::error::GtResult;

use super::{format_date, new_table, or_dash, print_json, print_status};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum TokensAction {
    /// List a user's login sessions.
    List {
        /// User ID.
        user_id: u64,
    },
    /// Revoke one login session.
    Revoke {
        /// User ID.
        user_id: u64,
        /// Auth token ID, as shown by `tokens list`.
        token_id: i64,
    },
}

pub async fn run(api: &ApiClient, action: TokensAction, format: OutputFormat) -> GtResult<()> {
    match action {
        TokensAction::List { user_id } => {
            let tokens = api.get_user_auth_tokens(user_id).await?;
            match format {
                OutputFormat::Json => print_json(&tokens)?,
                OutputFormat::Text => {
                    if tokens.is_empty() {
                        println!("User {user_id} has no active sessions.");
                        return Ok(());
                    }
                    let mut table = new_table([
                        "ID", "Active", "Client IP", "Browser", "OS", "Created", "Last seen",
                    ]);
                    for t in &tokens {
                        let active = if t.is_active {
                            style("active").green().to_string()
                        } else {
                            style("inactive").dim().to_string()
                        };
                        table.add_row(vec![
                            t.id.to_string(),
                            active,
                            or_dash(&t.client_ip).to_string(),
                            format!("{} {}", t.browser, t.browser_version).trim().to_string(),
                            format!("{} {}", t.os, t.os_version).trim().to_string(),
                            format_date(t.created_at.as_ref()),
                            format_date(t.seen_at.as_ref()),
                        ]);
                    }
                    println!("{table}");
                    println!("\n{} session(s)", tokens.len());
                }
            }
        }
        TokensAction::Revoke { user_id, token_id } => {
            let msg = api.revoke_auth_token(user_id, token_id).await?;
            print_status(&msg, "User auth token revoked", format)?;
        }
    }
    Ok(())
}
