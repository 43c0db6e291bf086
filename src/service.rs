//! The service seam: the trait implemented by sub-command collaborators,
//! their result shape, and the name-to-service registry.
//!
//! A service may compute its result immediately or after real asynchronous
//! work; both shapes pass through the single `execute` future, so the
//! dispatcher never branches on how the result was produced.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Result payload returned by a service.
///
/// The payload is an arbitrary serializable value; a truthy `error` field on
/// a top-level object signals failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse(Value);

impl ServiceResponse {
    /// Wraps a raw JSON payload.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the `error` field when it signals failure.
    ///
    /// Absent, `null`, `false`, `0`, and `""` do not signal failure; any
    /// other value does.
    pub fn error(&self) -> Option<&Value> {
        let error = self.0.get("error")?;
        let truthy = match error {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        truthy.then_some(error)
    }

    /// Borrows the raw payload.
    pub fn value(&self) -> &Value {
        &self.0
    }
}

/// Trait implemented by sub-command services.
///
/// Execution failures (launch errors, crashes, rejected futures) are `Err`;
/// a service that ran but wants to signal a domain failure returns `Ok` with
/// an `error` field in the payload.
#[async_trait]
pub trait Service: Send + Sync {
    /// Runs the service with the pass-through argument list.
    async fn execute(&self, args: &[String]) -> anyhow::Result<ServiceResponse>;
}

/// Maps root command names to their services.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<String, Box<dyn Service>>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a service under the given command name.
    pub fn register(&mut self, name: impl Into<String>, service: Box<dyn Service>) {
        self.services.insert(name.into(), service);
    }

    /// Looks up the service for a command name.
    pub fn get(&self, name: &str) -> Option<&dyn Service> {
        self.services.get(name).map(|service| service.as_ref())
    }
}
