//! zapi - Zephyr for Jira test management CLI
//!
//! Main entry point: parses the CLI, dispatches to the ZAPI
//! operations, and maps outcomes to exit codes.

use clap::Parser;
use std::process;
use tracing::info;
use zapi::client::{Credentials, ZapiClient};
use zapi::commands::{Cli, Commands};
use zapi::cycle::{self, AddTestsRequest};
use zapi::execution::{self, ExecutionStatus};
use zapi::Result;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0
            let _ = e.print();
            if e.use_stderr() {
                process::exit(1);
            }
            process::exit(0);
        }
    };

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    if let Err(e) = zapi::logging::init(default_level) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(cli).await {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::AddTestsToCycle {
            base_url,
            username,
            password,
            issue_keys,
            version_id,
            cycle_id,
            project_id,
            method,
        } => {
            let issues = cycle::dedup_issue_keys(&issue_keys);
            info!(
                issues = issues.len(),
                version_id, cycle_id, project_id, "Adding tests to cycle"
            );

            let client = ZapiClient::new(Credentials::new(base_url, username, password))?;
            let request = AddTestsRequest {
                issues,
                version_id,
                cycle_id,
                project_id,
                method,
            };
            let response = cycle::add_tests_to_cycle(&client, &request).await?;

            println!("SUCCESS: Tests added to cycle successfully");
            println!("Response: {}", response);
            Ok(())
        }

        Commands::UpdateExecutionStatus {
            base_url,
            username,
            password,
            execution_ids,
            status,
        } => {
            // Validate the status code before touching the network
            let status: ExecutionStatus = status.parse()?;
            let ids = execution::parse_execution_ids(&execution_ids);

            let client = ZapiClient::new(Credentials::new(base_url, username, password))?;
            let stats = execution::update_bulk_status(&client, &ids, status).await;

            for message in &stats.errors {
                eprintln!("WARNING: Failed to update chunk: {}", message);
            }

            if stats.has_failures() {
                println!(
                    "PARTIAL SUCCESS: {} execution(s) updated, {} execution(s) failed",
                    stats.succeeded, stats.failed
                );
                process::exit(1);
            }

            println!(
                "SUCCESS: All {} execution(s) updated successfully",
                stats.succeeded
            );
            Ok(())
        }
    }
}
