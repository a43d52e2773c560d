//! Test cycle operations
//!
//! Adds test issues to an existing Zephyr test cycle via the ZAPI
//! `addTestsToCycle` endpoint.

use crate::client::ZapiClient;
use crate::Result;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// ZAPI endpoint for adding tests to a cycle
pub const ADD_TESTS_ENDPOINT: &str = "/jira/rest/zapi/latest/execution/addTestsToCycle";

/// Request body for the addTestsToCycle endpoint
///
/// Field names follow the ZAPI wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTestsRequest {
    /// Issue keys to add (e.g., `TEST-1`)
    pub issues: Vec<String>,

    /// Target version id (`-1` for unscheduled)
    pub version_id: i64,

    /// Target cycle id
    pub cycle_id: i64,

    /// Numeric project id
    pub project_id: i64,

    /// Assignment method (`"1"` adds by issue key)
    pub method: String,
}

/// Split a comma-separated list of issue keys and drop duplicates
///
/// Keys are taken verbatim between commas: no trimming, so `"A, B"`
/// yields `"A"` and `" B"`. Trailing empty fields are dropped (so a
/// trailing comma is harmless) but interior ones are kept. First
/// occurrence wins and input order is preserved.
pub fn dedup_issue_keys(raw: &str) -> Vec<String> {
    let mut fields: Vec<&str> = raw.split(',').collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }

    let mut seen = HashSet::new();
    fields
        .into_iter()
        .filter(|key| seen.insert(key.to_string()))
        .map(|key| key.to_string())
        .collect()
}

/// Add test issues to a cycle
///
/// Returns the raw response body on success.
///
/// # Errors
///
/// Returns an error for transport failures and non-2xx responses.
pub async fn add_tests_to_cycle(client: &ZapiClient, request: &AddTestsRequest) -> Result<String> {
    debug!(
        issues = request.issues.len(),
        cycle_id = request.cycle_id,
        "Adding tests to cycle"
    );
    client.post(ADD_TESTS_ENDPOINT, request).await
}
