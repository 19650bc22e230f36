//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Khione configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading applies environment overrides and validates
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Calculation Service: {}", config.backend.base_url);
        println!(
            "  Endpoints: {}, {}, {}",
            config.backend.process_path,
            config.backend.plot_path,
            config.backend.plot_economizer_path
        );
        println!("  Request Timeout: {}s", config.backend.timeout_seconds);
        println!("  Asset Host: {}", config.assets.base_url);
        println!("  Output Directory: {}", config.output.directory);
        println!(
            "  Default Input: {} / {} / evap {} °C / cond {} °C / superheat {} °C / {} RPM",
            config.input.model,
            config.input.refrigerant,
            config.input.evap_temp,
            config.input.cond_temp,
            config.input.superheat,
            config.input.speed
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}
