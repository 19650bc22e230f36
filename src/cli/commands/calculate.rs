//! Calculate command implementation
//!
//! This module implements the `calculate` command: submit the operating
//! parameters once and print the reconciled fields.

use super::{prepare, InputArgs};
use clap::Args;

/// Arguments for the calculate command
#[derive(Args, Debug)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the raw result set as JSON instead of the reconciled fields
    #[arg(long)]
    pub json: bool,
}

impl CalculateArgs {
    /// Execute the calculate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting calculate command");

        let (context, mut session) = match prepare(config_path, &self.input) {
            Ok(prepared) => prepared,
            Err(code) => return Ok(code),
        };

        let submitted = session.submit(context.calculation_service()).await;

        if self.json {
            if let Some(result) = session.result() {
                println!("{}", serde_json::to_string_pretty(result)?);
            }
        } else {
            println!("🧮 {} / {}", session.input().model, session.input().refrigerant);
            println!();
            for field in session.fields() {
                println!("  {field}");
            }
            println!();
        }

        match submitted {
            Ok(()) => Ok(0),
            Err(notice) => {
                println!("❌ {notice}");
                Ok(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn calculate_args(argv: &[&str]) -> super::CalculateArgs {
        match Cli::parse_from(argv).command {
            Commands::Calculate(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_json_flag() {
        assert!(!calculate_args(&["khione", "calculate"]).json);
        assert!(calculate_args(&["khione", "calculate", "--json"]).json);
    }

    #[test]
    fn test_json_flag_rejects_value() {
        assert!(Cli::try_parse_from(["khione", "calculate", "--json=yes"]).is_err());
    }
}
