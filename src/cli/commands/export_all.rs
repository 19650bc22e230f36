//! Export-all command implementation
//!
//! This module implements the `export-all` command: the report, both
//! diagrams and both documents are launched together from one session
//! snapshot and run independently.

use super::{prepare, print_outcome, InputArgs};
use crate::adapters::assets::DocumentKind;
use crate::adapters::calculation::DiagramKind;
use crate::core::export::DownloadControl;
use clap::Args;
use std::time::Instant;

/// Arguments for the export-all command
#[derive(Args, Debug)]
pub struct ExportAllArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Build the report from the input alone, without calling the service
    #[arg(long)]
    pub skip_calculation: bool,
}

impl ExportAllArgs {
    /// Execute the export-all command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export-all command");
        let start = Instant::now();

        let (context, mut session) = match prepare(config_path, &self.input) {
            Ok(prepared) => prepared,
            Err(code) => return Ok(code),
        };

        let mut exit_code = 0;
        if !self.skip_calculation {
            if let Err(notice) = session.submit(context.calculation_service()).await {
                println!("⚠️  Calculation failed: {notice}");
                exit_code = 1;
            }
        }

        let snapshot = session.snapshot();
        let model = snapshot.input.model;
        let orchestrator = &context.orchestrator;
        let mut drawing = DownloadControl::new(DocumentKind::Drawing.control_label());
        let mut manual = DownloadControl::new(DocumentKind::Manual.control_label());

        println!("📦 Exporting everything for {model}");
        println!();

        let (report, primary, economizer, drawing_outcome, manual_outcome) = futures::join!(
            orchestrator.export_report(&snapshot),
            orchestrator.export_diagram(DiagramKind::Primary, &snapshot.input),
            orchestrator.export_diagram(DiagramKind::Economizer, &snapshot.input),
            orchestrator.export_document(model, DocumentKind::Drawing, &mut drawing),
            orchestrator.export_document(model, DocumentKind::Manual, &mut manual),
        );

        let outcomes = [
            ("Report", &report),
            (DiagramKind::Primary.title(), &primary),
            (DiagramKind::Economizer.title(), &economizer),
            (drawing.label(), &drawing_outcome),
            (manual.label(), &manual_outcome),
        ];

        let mut saved = 0;
        for (name, outcome) in outcomes {
            if print_outcome(name, outcome) {
                saved += 1;
            }
        }

        println!();
        println!(
            "Saved {saved} of {} exports in {:.2}s",
            outcomes.len(),
            start.elapsed().as_secs_f64()
        );

        if saved < outcomes.len() {
            exit_code = 1;
        }
        Ok(exit_code)
    }
}
