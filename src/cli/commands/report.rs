//! Report command implementation
//!
//! This module implements the `report` command for exporting the PDF
//! results report.

use super::{prepare, print_outcome, InputArgs};
use clap::Args;

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Build the report from the input alone, without calling the service
    #[arg(long)]
    pub skip_calculation: bool,
}

impl ReportArgs {
    /// Execute the report command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(skip_calculation = self.skip_calculation, "Starting report command");

        let (context, mut session) = match prepare(config_path, &self.input) {
            Ok(prepared) => prepared,
            Err(code) => return Ok(code),
        };

        let mut exit_code = 0;
        if !self.skip_calculation {
            if let Err(notice) = session.submit(context.calculation_service()).await {
                println!("⚠️  Calculation failed: {notice}");
                println!("   Exporting with the values available");
                exit_code = 1;
            }
        }

        let outcome = context.orchestrator.export_report(&session.snapshot()).await;
        if !print_outcome("Report", &outcome) {
            exit_code = 1;
        }
        Ok(exit_code)
    }
}
