//! extension-cli - command dispatcher for GraphQL engine extension services.
//!
//! This library exposes the dispatcher modules for use in integration tests.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod output;
pub mod service;
pub mod services;
