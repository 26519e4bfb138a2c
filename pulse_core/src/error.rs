//! Error types for the pulse_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for pulse_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Month outside 0..=11, or a year chrono cannot represent
    #[error("Invalid month: year {year}, month {month} (expected 0-11)")]
    InvalidMonth { year: i32, month: u32 },

    /// Day that does not exist in its month
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Marker wheel violates its invariants
    #[error("Invalid marker wheel: {0}")]
    InvalidWheel(String),

    /// Mood label that is not on the wheel
    #[error("Unknown mood: {0}")]
    UnknownMood(String),
}
