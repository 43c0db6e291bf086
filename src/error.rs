//! Error types for extension-cli.
//!
//! Every failure path of a dispatch ends up here; the Display of the error is
//! exactly what the binary prints to stderr before exiting with code 1.

use serde_json::Value;
use thiserror::Error;

/// Main error type for dispatcher operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Service execution failures (launch failure, crash, rejected future).
    #[error("{0}")]
    Service(String),

    /// A service returned a result object carrying a truthy `error` field.
    #[error("{}", display_reported(.0))]
    Reported(Value),

    /// The output artifact could not be written.
    #[error("could not write output to \"{0}\"")]
    Output(String),

    /// Configuration errors (malformed config file, missing output path, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Creates a service execution error with the given message.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    /// Creates a write error naming the target path.
    pub fn output(path: impl Into<String>) -> Self {
        Self::Output(path.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Renders a service-reported error value for stderr.
///
/// String errors are printed bare (callers grep for the message itself);
/// anything else is rendered as compact JSON.
fn display_reported(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
