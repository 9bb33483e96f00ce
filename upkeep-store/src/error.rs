//! Error types for the UI state manager's collaborators.
//!
//! Transitions themselves never fail; these cover configuration, persisted
//! preferences, and the caller-side checks made by handles and flows.

use crate::config::ConfigError;
use crate::prefs::PreferenceError;
use upkeep_core::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Invalid credentials: {reason}")]
    InvalidCredentials { reason: &'static str },
    #[error("Comparison tray is full ({max} items)")]
    ComparisonFull { max: usize },
    #[error("Failed to read actions: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed action on line {line}: {source}")]
    Action {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to initialise tracing: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
    #[error("Failed to serialize state: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type UiResult<T> = Result<T, UiError>;
