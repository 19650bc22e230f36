//! Document command implementation
//!
//! This module implements the `document` command for downloading a
//! model's technical drawing or manual from the asset host.

use super::{prepare, print_outcome, InputArgs};
use crate::adapters::assets::DocumentKind;
use crate::core::export::DownloadControl;
use clap::Args;

/// Arguments for the document command
#[derive(Args, Debug)]
pub struct DocumentArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Document to download (drawing or manual)
    #[arg(long, default_value = "drawing")]
    pub kind: DocumentKind,
}

impl DocumentArgs {
    /// Execute the document command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(kind = %self.kind, "Starting document command");

        let (context, session) = match prepare(config_path, &self.input) {
            Ok(prepared) => prepared,
            Err(code) => return Ok(code),
        };

        let model = session.input().model;
        let mut control = DownloadControl::new(self.kind.control_label());
        println!("📄 {} for {model}", control.label());

        let outcome = context
            .orchestrator
            .export_document(model, self.kind, &mut control)
            .await;

        let saved = print_outcome(control.label(), &outcome);
        println!(
            "   Control restored: '{}' ({})",
            control.label(),
            if control.is_enabled() { "enabled" } else { "disabled" }
        );
        Ok(if saved { 0 } else { 1 })
    }
}
