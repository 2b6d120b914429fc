//! Configuration commands.

use std::path::Path;

use clap::Subcommand;
use console::style;

use gt_core::config::AppConfig;
use gt_core::error::{GtError, GtResult};

use super::print_json;
use crate::OutputFormat;

const MASK: &str = "********";

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration with secrets masked.
    Show,
    /// Write a configuration file.
    Init {
        /// Grafana base URL to store.
        #[arg(long)]
        server_url: Option<String>,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub fn run(config: &AppConfig, path: &Path, action: ConfigAction, format: OutputFormat) -> GtResult<()> {
    match action {
        ConfigAction::Show => {
            let masked = masked(config);
            match format {
                OutputFormat::Json => print_json(&masked)?,
                OutputFormat::Text => {
                    let text = toml::to_string_pretty(&masked)
                        .map_err(|e| GtError::Config(format!("failed to serialize config: {e}")))?;
                    println!("# {}", path.display());
                    println!("{text}");
                }
            }
        }
        ConfigAction::Init { server_url, force } => {
            if path.exists() && !force {
                return Err(GtError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            let mut fresh = config.clone();
            if let Some(url) = server_url {
                fresh.server.url = AppConfig::sanitize_server_url(&url);
            }
            fresh.save_to_file(path)?;
            match format {
                OutputFormat::Json => {
                    print_json(&serde_json::json!({ "path": path.display().to_string() }))?
                }
                OutputFormat::Text => println!(
                    "  {} Wrote {}",
                    style("OK").green().bold(),
                    path.display()
                ),
            }
        }
    }
    Ok(())
}

/// Copy of the configuration safe to print.
fn masked(config: &AppConfig) -> AppConfig {
    let mut copy = config.clone();
    if !copy.server.api_token.is_empty() {
        copy.server.api_token = MASK.to_string();
    }
    if !copy.server.basic_password.is_empty() {
        copy.server.basic_password = MASK.to_string();
    }
    copy
}
