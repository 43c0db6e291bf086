//! The output side of a dispatch: the JSON artifact written for the caller
//! and the acknowledgment line printed to stdout.

use crate::error::{CliError, Result};
use crate::service::ServiceResponse;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serializes a successful response and writes it to `path`, overwriting any
/// existing content. One write, no partial-write recovery.
pub fn write_result(path: &Path, response: &ServiceResponse) -> Result<()> {
    let json = serde_json::to_string(response.value())
        .map_err(|e| CliError::internal(format!("could not serialize result: {e}")))?;
    fs::write(path, json).map_err(|_| CliError::output(path.display().to_string()))
}

/// Completion acknowledgment printed to stdout as a single JSON line.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub output_file_path: String,
}

impl Ack {
    /// Acknowledges a completed dispatch that wrote `path`.
    pub fn completed(path: &Path) -> Self {
        Self {
            success: true,
            output_file_path: path.display().to_string(),
        }
    }

    /// Renders the acknowledgment as one JSON line.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CliError::internal(format!("could not serialize acknowledgment: {e}")))
    }
}
