//! Organization context commands.

use clap::Subcommand;

use gt_api::ApiClient;
use gt_core::error::GtResult;

use super::print_status;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ContextAction {
    /// Switch the active organization of the signed-in user, or of another user.
    Switch {
        /// Organization ID to switch to.
        org_id: u64,
        /// Switch this user instead of the signed-in one (server admin only).
        #[arg(long)]
        user: Option<u64>,
    },
}

pub async fn run(api: &ApiClient, action: ContextAction, format: OutputFormat) -> GtResult<()> {
    match action {
        ContextAction::Switch { org_id, user } => {
            let msg = match user {
                Some(id) => api.switch_user_context(id, org_id).await?,
                None => api.switch_actual_user_context(org_id).await?,
            };
            print_status(&msg, "Active organization changed", format)?;
        }
    }
    Ok(())
}
