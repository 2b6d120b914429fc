//! Team commands.

use clap::Subcommand;

use gt_api::ApiClient;
use gt_core::error::GtResult;
use gt_models::Team;

use super::{new_table, or_dash, print_json};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum TeamsAction {
    /// Find teams by exact name.
    Search {
        /// Team name.
        name: String,
    },
}

pub async fn run(api: &ApiClient, action: TeamsAction, format: OutputFormat) -> GtResult<()> {
    match action {
        TeamsAction::Search { name } => {
            let result = api.search_team_with_name(&name).await?;
            match format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => {
                    if result.teams.is_empty() {
                        println!("No team named \"{name}\".");
                    } else {
                        print_team_table(&result.teams);
                        println!("\n{} team(s)", result.total_count);
                    }
                }
            }
        }
    }
    Ok(())
}

pub fn print_team_table(teams: &[Team]) {
    if teams.is_empty() {
        println!("No teams.");
        return;
    }
    let mut table = new_table(["ID", "Name", "Email", "Members"]);
    for t in teams {
        table.add_row(vec![
            t.id.to_string(),
            t.name.clone(),
            or_dash(&t.email).to_string(),
            t.member_count.to_string(),
        ]);
    }
    println!("{table}");
}
