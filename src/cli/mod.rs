//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Khione using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Khione - Compressor results viewer and exporter
#[derive(Parser, Debug)]
#[command(name = "khione")]
#[command(version, about, long_about = None)]
#[command(author = "Khione Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "khione.toml", env = "KHIONE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KHIONE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit operating parameters and show the reconciled results
    Calculate(commands::calculate::CalculateArgs),

    /// Export the PDF results report
    Report(commands::report::ReportArgs),

    /// Export a pressure-enthalpy diagram
    Diagram(commands::diagram::DiagramArgs),

    /// Download a technical drawing or manual
    Document(commands::document::DocumentArgs),

    /// Run every export at once
    ExportAll(commands::export_all::ExportAllArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assets::DocumentKind;
    use crate::domain::CompressorModel;

    #[test]
    fn test_cli_parse_calculate() {
        let cli = Cli::parse_from(["khione", "calculate"]);
        assert_eq!(cli.config, "khione.toml");
        assert!(matches!(cli.command, Commands::Calculate(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["khione", "--config", "custom.toml", "report"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Report(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["khione", "--log-level", "debug", "calculate"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_input_flags() {
        let cli = Cli::parse_from([
            "khione",
            "calculate",
            "--model",
            "krs4150",
            "--evap-temp",
            "-5",
            "--speed",
            "3600",
            "--set",
            "refrigerant=R134a",
        ]);
        match cli.command {
            Commands::Calculate(args) => {
                assert_eq!(args.input.model, Some(CompressorModel::Krs4150));
                assert_eq!(args.input.evap_temp, Some(-5.0));
                assert_eq!(args.input.speed, Some(3600));
                assert_eq!(args.input.edits, vec!["refrigerant=R134a".to_string()]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_diagram_economizer() {
        let cli = Cli::parse_from(["khione", "diagram", "--economizer"]);
        match cli.command {
            Commands::Diagram(args) => assert!(args.economizer),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_document_kind() {
        let cli = Cli::parse_from(["khione", "document", "--kind", "manual"]);
        match cli.command {
            Commands::Document(args) => assert_eq!(args.kind, DocumentKind::Manual),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_model() {
        assert!(Cli::try_parse_from(["khione", "calculate", "--model", "KRS9999"]).is_err());
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["khione", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_export_all_and_init() {
        let cli = Cli::parse_from(["khione", "export-all"]);
        assert!(matches!(cli.command, Commands::ExportAll(_)));

        let cli = Cli::parse_from(["khione", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
