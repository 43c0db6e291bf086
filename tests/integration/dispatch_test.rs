//! Integration tests for the dispatch pipeline, driven through the library
//! with stub services standing in for the external collaborators.

use async_trait::async_trait;
use extension_cli::cli::Invocation;
use extension_cli::dispatch::{self, Outcome};
use extension_cli::error::CliError;
use extension_cli::service::{Service, ServiceRegistry, ServiceResponse};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

/// Resolves immediately with a fixed payload.
struct Immediate(Value);

#[async_trait]
impl Service for Immediate {
    async fn execute(&self, _args: &[String]) -> anyhow::Result<ServiceResponse> {
        Ok(ServiceResponse::new(self.0.clone()))
    }
}

/// Resolves after a real suspension, like a service doing asynchronous work.
struct Deferred(Value);

#[async_trait]
impl Service for Deferred {
    async fn execute(&self, _args: &[String]) -> anyhow::Result<ServiceResponse> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok(ServiceResponse::new(self.0.clone()))
    }
}

/// Rejects after a real suspension.
struct DeferredRejection(&'static str);

#[async_trait]
impl Service for DeferredRejection {
    async fn execute(&self, _args: &[String]) -> anyhow::Result<ServiceResponse> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        anyhow::bail!("{}", self.0)
    }
}

/// Fails without ever suspending, like a synchronous throw.
struct ImmediateFailure(&'static str);

#[async_trait]
impl Service for ImmediateFailure {
    async fn execute(&self, _args: &[String]) -> anyhow::Result<ServiceResponse> {
        anyhow::bail!("{}", self.0)
    }
}

fn registry(name: &str, service: Box<dyn Service>) -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register(name, service);
    registry
}

fn invocation(args: &[&str]) -> Invocation {
    Invocation::from_arg_list(args.iter().map(|s| s.to_string()).collect())
}

#[tokio::test]
async fn clean_result_is_written_and_acknowledged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let registry = registry(
        "actions-codegen",
        Box::new(Immediate(json!({ "result": "ok" }))),
    );

    let outcome = dispatch::run(
        invocation(&[
            "actions-codegen",
            "--output-file",
            path.to_str().unwrap(),
            "--foo",
            "bar",
        ]),
        &registry,
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        Outcome::Completed {
            output_file_path: path.clone()
        }
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"result":"ok"}"#);
}

#[tokio::test]
async fn deferred_result_is_normalized_like_an_immediate_one() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let registry = registry("sdl", Box::new(Deferred(json!({ "sdl": "type Query { ok: Boolean }" }))));

    let outcome = dispatch::run(
        invocation(&["sdl", "--output-file", path.to_str().unwrap()]),
        &registry,
    )
    .await
    .unwrap();

    assert!(matches!(outcome, Outcome::Completed { .. }));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"sdl":"type Query { ok: Boolean }"}"#
    );
}

#[tokio::test]
async fn reported_error_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, "previous run").unwrap();
    let registry = registry(
        "actions-codegen",
        Box::new(Immediate(json!({ "error": "bad input" }))),
    );

    let err = dispatch::run(
        invocation(&["actions-codegen", "--output-file", path.to_str().unwrap()]),
        &registry,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "bad input");
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run");
}

#[tokio::test]
async fn deferred_reported_error_behaves_like_immediate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let registry = registry("sdl", Box::new(Deferred(json!({ "error": "bad input" }))));

    let err = dispatch::run(
        invocation(&["sdl", "--output-file", path.to_str().unwrap()]),
        &registry,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "bad input");
    assert!(!path.exists());
}

#[tokio::test]
async fn immediate_failure_is_a_service_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let registry = registry("sdl", Box::new(ImmediateFailure("schema exploded")));

    let err = dispatch::run(
        invocation(&["sdl", "--output-file", path.to_str().unwrap()]),
        &registry,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Service(_)));
    assert!(err.to_string().contains("schema exploded"));
    assert!(!path.exists());
}

#[tokio::test]
async fn deferred_rejection_is_a_service_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let registry = registry("sdl", Box::new(DeferredRejection("upstream timed out")));

    let err = dispatch::run(
        invocation(&["sdl", "--output-file", path.to_str().unwrap()]),
        &registry,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Service(_)));
    assert!(err.to_string().contains("upstream timed out"));
    assert!(!path.exists());
}

#[tokio::test]
async fn unknown_command_invokes_nothing_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let registry = registry("sdl", Box::new(Immediate(json!({ "result": "ok" }))));

    let outcome = dispatch::run(
        invocation(&["types-codegen", "--output-file", path.to_str().unwrap()]),
        &registry,
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::Skipped);
    assert!(!path.exists());
}

#[tokio::test]
async fn write_failure_names_the_target_path() {
    let registry = registry("sdl", Box::new(Immediate(json!({ "result": "ok" }))));

    let err = dispatch::run(
        invocation(&["sdl", "--output-file", "/no/such/dir/out.json"]),
        &registry,
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "could not write output to \"/no/such/dir/out.json\""
    );
}
