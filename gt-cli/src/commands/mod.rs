//! CLI command implementations.

pub mod config;
pub mod context;
pub mod library;
pub mod teams;
pub mod tokens;
pub mod users;

use chrono::{DateTime, Utc};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;
use serde::Serialize;

use gt_api::{ApiClient, CancellationToken};
use gt_core::config::AppConfig;
use gt_core::error::{GtError, GtResult};
use gt_models::StatusMessage;

use crate::OutputFormat;

/// Helper to create an API client from config, cancelled by `cancel`.
pub fn create_api_client(config: &AppConfig, cancel: CancellationToken) -> GtResult<ApiClient> {
    Ok(ApiClient::new(&config.server)?.with_cancellation(cancel))
}

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> GtResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| GtError::Encoding(e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// A table with the shared CLI look.
pub fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Report the outcome of a state-changing call.
pub fn print_status(msg: &StatusMessage, fallback: &str, format: OutputFormat) -> GtResult<()> {
    match format {
        OutputFormat::Json => print_json(msg),
        OutputFormat::Text => {
            let text = msg.message.as_deref().unwrap_or(fallback);
            println!("  {} {}", style("OK").green().bold(), text);
            Ok(())
        }
    }
}

/// Map a prompt failure (e.g. no TTY) onto the IO error kind.
pub fn prompt_error(e: dialoguer::Error) -> GtError {
    GtError::Io(std::io::Error::other(e))
}

/// Short date for table cells, or "-" when unknown.
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Render a boolean as a yes/no cell.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Use "-" for empty strings in table cells.
pub fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Truncate a string to a maximum number of characters, appending an ellipsis if truncated.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars > 3 {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 10), "a long ...");
        assert_eq!(truncate("café au lait", 6), "caf...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_date() {
        let date = "2024-03-01T12:30:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_date(Some(&date)), "2024-03-01 12:30");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_cell_helpers() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("Main Org."), "Main Org.");
    }
}
