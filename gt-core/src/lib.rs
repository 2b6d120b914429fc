//! Grafana admin core - configuration, error handling and logging.
//!
//! This crate provides the shared foundation used by the other workspace crates:
//! - Application configuration (server URL, credentials, logging)
//! - The `GtError` type covering encoding, transport, status and decoding failures
//! - Structured logging with tracing
//! - Per-user config and log directories, common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, Credentials, ServerConfig};
pub use error::{GtError, GtResult, TransportError};
pub use logging::init_logging;
