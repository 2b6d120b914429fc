//! Per-user directories for configuration and logs.
//!
//! Resolved through `dirs`, so each OS gets its native location:
//! `~/.config`, `~/Library/Application Support` or `%APPDATA%`, each with
//! a `grafana-admin` subdirectory.

use std::path::PathBuf;

use crate::constants;
use crate::error::{GtError, GtResult};

fn app_dir(base: Option<PathBuf>, kind: &str) -> GtResult<PathBuf> {
    base.map(|dir| dir.join(constants::APP_DIR_NAME))
        .ok_or_else(|| GtError::Config(format!("could not determine {kind} directory")))
}

/// Directory holding `config.toml`.
pub fn config_dir() -> GtResult<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

/// Directory for application data.
pub fn data_dir() -> GtResult<PathBuf> {
    app_dir(dirs::data_dir(), "data")
}

/// Default directory for rotated log files.
pub fn log_dir() -> GtResult<PathBuf> {
    Ok(data_dir()?.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_are_namespaced() {
        if let Ok(dir) = config_dir() {
            assert!(dir.ends_with(constants::APP_DIR_NAME));
        }
        if let Ok(dir) = log_dir() {
            assert!(dir.ends_with("logs"));
            assert!(dir.parent().is_some_and(|p| p.ends_with(constants::APP_DIR_NAME)));
        }
    }

    #[test]
    fn test_missing_base_is_config_error() {
        let err = app_dir(None, "config").unwrap_err();
        assert!(matches!(err, GtError::Config(ref msg) if msg.contains("config directory")));
    }
}
