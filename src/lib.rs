//! zapi - Zephyr for Jira test management CLI
//!
//! Command-line client for the Zephyr for Jira (ZAPI) REST API. Two
//! operations: add test issues to an existing test cycle, and
//! bulk-update execution statuses in chunks of 25 with per-chunk
//! failure tallying.
//!
//! # Architecture
//!
//! - **client**: HTTP client (Basic auth, JSON bodies, uniform status checks)
//! - **cycle**: addTestsToCycle operation and issue key handling
//! - **execution**: updateBulkStatus operation, chunking, outcome tally
//! - **commands**: clap CLI definitions
//! - **logging**: tracing setup

pub mod client;
pub mod commands;
pub mod cycle;
pub mod error;
pub mod execution;
pub mod logging;

// Re-exports
pub use error::{Result, ZapiError};
