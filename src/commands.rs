//! CLI command definitions
//!
//! All CLI structs and subcommand enums are defined here.

use clap::{Parser, Subcommand};

/// zapi - Zephyr for Jira test management CLI
#[derive(Parser, Debug)]
#[command(name = "zapi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add test issues to an existing test cycle
    AddTestsToCycle {
        /// Jira base URL (e.g., https://jira.example.com)
        base_url: String,

        /// Jira username
        username: String,

        /// Jira password
        password: String,

        /// Comma-separated issue keys (e.g., TEST-1,TEST-2)
        issue_keys: String,

        /// Version id (-1 for unscheduled)
        #[arg(allow_negative_numbers = true)]
        version_id: i64,

        /// Cycle id (-1 for the Ad hoc cycle)
        #[arg(allow_negative_numbers = true)]
        cycle_id: i64,

        /// Numeric project id
        #[arg(allow_negative_numbers = true)]
        project_id: i64,

        /// Assignment method ("1" adds by issue key)
        #[arg(default_value = "1")]
        method: String,
    },

    /// Update execution statuses in bulk, 25 at a time
    UpdateExecutionStatus {
        /// Jira base URL (e.g., https://jira.example.com)
        base_url: String,

        /// Jira username
        username: String,

        /// Jira password
        password: String,

        /// Comma-separated execution ids (e.g., 101,102)
        execution_ids: String,

        /// New status: "1" (Pass) or "2" (Fail)
        status: String,
    },
}
