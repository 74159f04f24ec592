//! Error types for configuration loading and terminal drawing
//!
//! Calculator transitions never fail; these errors only come from the
//! surroundings.

use thiserror::Error;

/// Result type for fallible keypad-calc operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur outside the state machine
#[derive(Debug, Error)]
pub enum CalcError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A color string in the view configuration could not be parsed
    #[error("Invalid color for `{field}`: {value:?}")]
    InvalidColor {
        /// Configuration field name
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// A button could not be reached because the terminal is too small
    #[error("Button `{label}` is not visible")]
    ButtonNotVisible {
        /// Button label
        label: String,
    },

    /// A label that names no keypad button
    #[error("Unknown button label {label:?}")]
    UnknownLabel {
        /// Offending label
        label: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
