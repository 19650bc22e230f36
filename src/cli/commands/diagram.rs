//! Diagram command implementation
//!
//! This module implements the `diagram` command for exporting a
//! pressure-enthalpy diagram rendered by the calculation service.

use super::{prepare, print_outcome, InputArgs};
use crate::adapters::calculation::DiagramKind;
use clap::Args;

/// Arguments for the diagram command
#[derive(Args, Debug)]
pub struct DiagramArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Export the economizer variant
    #[arg(long)]
    pub economizer: bool,
}

impl DiagramArgs {
    pub fn kind(&self) -> DiagramKind {
        if self.economizer {
            DiagramKind::Economizer
        } else {
            DiagramKind::Primary
        }
    }

    /// Execute the diagram command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let kind = self.kind();
        tracing::info!(kind = %kind, "Starting diagram command");

        let (context, session) = match prepare(config_path, &self.input) {
            Ok(prepared) => prepared,
            Err(code) => return Ok(code),
        };

        let outcome = context
            .orchestrator
            .export_diagram(kind, session.input())
            .await;
        Ok(if print_outcome(kind.title(), &outcome) { 0 } else { 1 })
    }
}
