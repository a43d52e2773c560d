//! Execution status operations
//!
//! Bulk-updates Zephyr execution statuses via the ZAPI
//! `updateBulkStatus` endpoint. Updates go out in fixed-size chunks;
//! a failed chunk is tallied and the remaining chunks still run.

use crate::client::ZapiClient;
use crate::Result;
use crate::ZapiError;
use serde::Serialize;
use std::collections::HashSet;
use std::future::Future;
use std::str::FromStr;
use tracing::{debug, error, info};

/// ZAPI endpoint for bulk execution status updates
pub const BULK_STATUS_ENDPOINT: &str = "/jira/rest/zapi/latest/execution/updateBulkStatus";

/// Maximum executions per updateBulkStatus request
pub const CHUNK_SIZE: usize = 25;

/// Zephyr execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Pass,
    Fail,
}

impl ExecutionStatus {
    /// The numeric status code ZAPI expects on the wire
    pub fn code(&self) -> &'static str {
        match self {
            ExecutionStatus::Pass => "1",
            ExecutionStatus::Fail => "2",
        }
    }

    /// Human-readable status name
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionStatus::Pass => "Pass",
            ExecutionStatus::Fail => "Fail",
        }
    }
}

impl FromStr for ExecutionStatus {
    type Err = ZapiError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1" => Ok(ExecutionStatus::Pass),
            "2" => Ok(ExecutionStatus::Fail),
            other => Err(ZapiError::Parse(format!(
                "Invalid status '{}'. Must be '1' (Pass) or '2' (Fail)",
                other
            ))),
        }
    }
}

/// Request body for the updateBulkStatus endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BulkStatusRequest {
    /// Execution ids to update
    pub executions: Vec<String>,

    /// Numeric status code as a string (`"1"` or `"2"`)
    pub status: String,
}

/// Outcome tally for a bulk update
#[derive(Debug, Default, Clone)]
pub struct BulkUpdateStats {
    /// Executions updated successfully
    pub succeeded: usize,

    /// Executions in chunks that failed
    pub failed: usize,

    /// One message per failed chunk
    pub errors: Vec<String>,
}

impl BulkUpdateStats {
    /// Total executions attempted
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Whether any chunk failed
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Split a comma-separated list of execution ids
///
/// Ids are trimmed, empty entries dropped, and duplicates removed with
/// first occurrence winning. Input order is preserved.
pub fn parse_execution_ids(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.to_string()))
        .map(|id| id.to_string())
        .collect()
}

/// Run an update operation over fixed-size chunks of execution ids
///
/// Each chunk is handed to `update` in input order. A failed chunk
/// counts all of its ids as failed and records the error message; the
/// loop always continues to the next chunk.
pub async fn update_in_chunks<F, Fut>(execution_ids: &[String], mut update: F) -> BulkUpdateStats
where
    F: FnMut(Vec<String>) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let mut stats = BulkUpdateStats::default();
    let total_chunks = execution_ids.len().div_ceil(CHUNK_SIZE);

    for (index, chunk) in execution_ids.chunks(CHUNK_SIZE).enumerate() {
        info!(
            chunk = index + 1,
            total_chunks,
            size = chunk.len(),
            "Updating execution chunk"
        );

        match update(chunk.to_vec()).await {
            Ok(body) => {
                debug!(body = %body, "Chunk updated");
                stats.succeeded += chunk.len();
            }
            Err(e) => {
                error!(chunk = index + 1, error = %e, "Failed to update chunk");
                stats.failed += chunk.len();
                stats.errors.push(e.to_string());
            }
        }
    }

    stats
}

/// Update the status of every execution id, 25 at a time
///
/// Never fails as a whole: per-chunk errors are tallied in the
/// returned stats.
pub async fn update_bulk_status(
    client: &ZapiClient,
    execution_ids: &[String],
    status: ExecutionStatus,
) -> BulkUpdateStats {
    info!(
        total = execution_ids.len(),
        status = status.label(),
        "Starting bulk status update"
    );

    update_in_chunks(execution_ids, |chunk| async move {
        let request = BulkStatusRequest {
            executions: chunk,
            status: status.code().to_string(),
        };
        client.put(BULK_STATUS_ENDPOINT, &request).await
    })
    .await
}
