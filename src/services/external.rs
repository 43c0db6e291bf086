//! Service backends launched as external processes.

use crate::config::Config;
use crate::service::{Service, ServiceResponse};
use anyhow::{bail, Context};
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// A service implemented by an external executable.
///
/// The executable is launched with the pass-through arguments and must print
/// the JSON result object to stdout. A non-zero exit status or non-JSON
/// output is an execution failure; domain failures travel inside the result
/// object's `error` field as usual.
pub struct ExternalService {
    name: &'static str,
    program: Option<PathBuf>,
}

impl ExternalService {
    /// Creates a service for `name`, backed by `program` when configured.
    pub fn new(name: &'static str, program: Option<PathBuf>) -> Self {
        Self { name, program }
    }
}

#[async_trait]
impl Service for ExternalService {
    async fn execute(&self, args: &[String]) -> anyhow::Result<ServiceResponse> {
        let Some(program) = &self.program else {
            bail!(
                "no backend configured for `{}`; set it under [services] in {}",
                self.name,
                Config::resolve_path().display()
            );
        };

        debug!(service = self.name, program = %program.display(), "launching backend");
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .with_context(|| {
                format!(
                    "could not launch `{}` backend {}",
                    self.name,
                    program.display()
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "`{}` backend exited with {}: {}",
                self.name,
                output.status,
                stderr.trim()
            );
        }

        let value: Value = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("`{}` backend produced invalid JSON", self.name))?;
        Ok(ServiceResponse::new(value))
    }
}
