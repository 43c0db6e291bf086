//! The dispatch pipeline: select a service, invoke it, normalize the result,
//! and write the output artifact.

use crate::cli::{Invocation, OUTPUT_FILE_FLAG};
use crate::error::{CliError, Result};
use crate::output;
use crate::service::ServiceRegistry;
use std::path::PathBuf;
use tracing::debug;

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A service ran cleanly and its result was written to this path.
    Completed { output_file_path: PathBuf },
    /// No recognized root command; nothing was invoked, written, or printed.
    Skipped,
}

/// Runs one invocation against the registry.
///
/// The pipeline is linear: unrecognized root commands skip out, execution
/// failures and service-reported errors bail before any write, and the output
/// path is only checked once there is a successful result to record.
pub async fn run(invocation: Invocation, registry: &ServiceRegistry) -> Result<Outcome> {
    let Some(root) = invocation.root else {
        debug!("empty invocation, skipping");
        return Ok(Outcome::Skipped);
    };
    let Some(service) = registry.get(&root) else {
        debug!(command = %root, "unrecognized root command, skipping");
        return Ok(Outcome::Skipped);
    };

    debug!(command = %root, args = ?invocation.service_args, "invoking service");
    let response = service
        .execute(&invocation.service_args)
        .await
        .map_err(|e| CliError::service(format!("{e:#}")))?;

    if let Some(error) = response.error() {
        return Err(CliError::Reported(error.clone()));
    }

    let Some(path) = invocation.output_file else {
        return Err(CliError::config(format!(
            "no output file path given; pass {OUTPUT_FILE_FLAG} <path>"
        )));
    };

    output::write_result(&path, &response)?;
    debug!(path = %path.display(), "result written");
    Ok(Outcome::Completed {
        output_file_path: path,
    })
}
