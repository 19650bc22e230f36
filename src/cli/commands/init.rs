//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "khione.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Khione configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your service addresses", self.output);
                println!("  2. Validate configuration: khione validate-config");
                println!("  3. Run a calculation: khione calculate");
                println!("  4. Export everything: khione export-all");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Khione Configuration File
# Compressor results viewer and exporter

[application]
log_level = "info"

[backend]
base_url = "http://127.0.0.1:5000"
timeout_seconds = 60

[assets]
base_url = "http://127.0.0.1:5173/assets"

[output]
directory = "."

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Khione Configuration File
# Compressor results viewer and exporter
#
# Every value can reference environment variables as ${VAR}, and most can be
# overridden with KHIONE_<SECTION>_<KEY> variables.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Calculation Service
# ============================================================================
[backend]
# Base URL of the calculation and plotting service
base_url = "${KHIONE_BACKEND_URL}"

# Endpoint paths, relative to base_url
process_path = "process"
plot_path = "plot"
plot_economizer_path = "plot_economizer"

# Request timeout in seconds
timeout_seconds = 60

# TLS certificate verification
tls_verify = true

# ============================================================================
# Static Assets
# ============================================================================
[assets]
# Host serving {model}.png reference images and {model}_Dr.pdf / {model}_MA.pdf
base_url = "http://127.0.0.1:5173/assets"
timeout_seconds = 60

# ============================================================================
# Output
# ============================================================================
[output]
# Directory receiving reports, diagrams and documents
directory = "exports"

# ============================================================================
# Default Operating Parameters
# ============================================================================
[input]
model = "KRS4115"
refrigerant = "Ammonia"
evap_temp = 10.0
cond_temp = 30.0
superheat = 0.0
speed = 2980

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local JSON file logging
local_enabled = false

# Local log file directory
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
