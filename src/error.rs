//! Error types for creation sessions
//!
//! Resolution misses and out-of-session signals are not errors; only
//! configuration problems and failed pixel-to-time conversions surface here.

use thiserror::Error;

/// Errors that can occur while configuring or driving a creation session
#[derive(Error, Debug)]
pub enum CreationError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Column class pattern failed to compile
    #[error("Invalid class pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Column has no usable height
    #[error("Column {column} has invalid height {height}px")]
    InvalidColumnHeight { column: usize, height: f64 },

    /// Column top edge is not a finite number
    #[error("Column {column} has non-finite top {top}")]
    InvalidColumnTop { column: usize, top: f64 },

    /// Timestamp arithmetic left the representable range
    #[error("Column {column} time arithmetic out of range")]
    TimeOutOfRange { column: usize },

    /// Pointer coordinates are not finite numbers
    #[error("Non-finite pointer coordinate: {0}")]
    NonFinitePointer(f64),

    /// Column renders an empty or inverted hour range
    #[error("Column {column} has invalid hour range {start}..{end}")]
    InvalidHourRange { column: usize, start: u32, end: u32 },

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for creation operations
pub type CreationResult<T> = Result<T, CreationError>;

impl From<String> for CreationError {
    fn from(s: String) -> Self {
        CreationError::Other(s)
    }
}

impl From<&str> for CreationError {
    fn from(s: &str) -> Self {
        CreationError::Other(s.to_string())
    }
}
