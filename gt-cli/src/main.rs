//! grafana-admin - command-line administration for a Grafana server.
//!
//! Drives the user, team, admin and library element endpoints of `gt-api`
//! from the terminal. Output is either human-readable tables or JSON for
//! scripting.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gt_api::CancellationToken;
use tracing::{debug, info, warn};

use gt_core::config::AppConfig;
use gt_core::constants;
use gt_core::error::GtResult;
use gt_core::logging;

/// Grafana user, team and library element administration.
#[derive(Parser)]
#[command(
    name = "grafana-admin",
    version,
    about = "Grafana administration CLI",
    long_about = "A command-line interface for administering users, teams and library\n\
                  elements of a Grafana server through its HTTP API."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Grafana base URL (overrides config).
    #[arg(long, global = true, env = "GRAFANA_URL")]
    url: Option<String>,

    /// API token or service account token (overrides config).
    #[arg(long, global = true, env = "GRAFANA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up and administer users.
    Users {
        #[command(subcommand)]
        action: commands::users::UsersAction,
    },
    /// Search teams.
    Teams {
        #[command(subcommand)]
        action: commands::teams::TeamsAction,
    },
    /// List and revoke user login sessions.
    Tokens {
        #[command(subcommand)]
        action: commands::tokens::TokensAction,
    },
    /// Switch the active organization.
    Context {
        #[command(subcommand)]
        action: commands::context::ContextAction,
    },
    /// Search, export and import library elements.
    Library {
        #[command(subcommand)]
        action: commands::library::LibraryAction,
    },
    /// View or create the configuration file.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> GtResult<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::default_config_path()?,
    };
    let mut config = if config_path.exists() {
        AppConfig::load_from_file(&config_path)?
    } else {
        AppConfig::default()
    };
    apply_overrides(&mut config, cli.url.as_deref(), cli.token.as_deref());

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let _guard = match config.effective_log_dir().and_then(|dir| {
        logging::init_logging(&log_level, &dir, config.logging.json_output)
    }) {
        Ok(guard) => Some(guard),
        Err(e) => {
            logging::init_console_logging(&log_level);
            warn!("file logging disabled: {e}");
            None
        }
    };

    info!("{} v{}", constants::APP_NAME, constants::APP_VERSION);
    debug!("config file: {}", config_path.display());

    // Ctrl+C cancels the in-flight request.
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match cli.command {
        Commands::Users { action } => {
            let api = commands::create_api_client(&config, cancel)?;
            commands::users::run(&api, action, cli.format).await
        }
        Commands::Teams { action } => {
            let api = commands::create_api_client(&config, cancel)?;
            commands::teams::run(&api, action, cli.format).await
        }
        Commands::Tokens { action } => {
            let api = commands::create_api_client(&config, cancel)?;
            commands::tokens::run(&api, action, cli.format).await
        }
        Commands::Context { action } => {
            let api = commands::create_api_client(&config, cancel)?;
            commands::context::run(&api, action, cli.format).await
        }
        Commands::Library { action } => {
            let api = commands::create_api_client(&config, cancel)?;
            commands::library::run(&api, action, cli.format).await
        }
        Commands::Config { action } => {
            commands::config::run(&config, &config_path, action, cli.format)
        }
    }
}

/// Apply command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut AppConfig, url: Option<&str>, token: Option<&str>) {
    if let Some(url) = url {
        config.server.url = AppConfig::sanitize_server_url(url);
    }
    if let Some(token) = token {
        config.server.api_token = token.to_string();
    }
}
