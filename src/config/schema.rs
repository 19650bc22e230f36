//! Configuration schema types
//!
//! This module defines the configuration structure for Khione.

use crate::domain::FormInput;
use serde::{Deserialize, Serialize};

/// Main Khione configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KhioneConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Calculation and plotting service
    #[serde(default)]
    pub backend: BackendConfig,

    /// Static asset host (reference images, drawings, manuals)
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Where exported files are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Starting operating parameters for a session
    #[serde(default)]
    pub input: FormInput,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl KhioneConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.backend.validate()?;
        self.assets.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Calculation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the calculation service
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Calculation endpoint, relative to `base_url`
    #[serde(default = "default_process_path")]
    pub process_path: String,

    /// Primary diagram endpoint, relative to `base_url`
    #[serde(default = "default_plot_path")]
    pub plot_path: String,

    /// Economizer diagram endpoint, relative to `base_url`
    #[serde(default = "default_plot_economizer_path")]
    pub plot_economizer_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            process_path: default_process_path(),
            plot_path: default_plot_path(),
            plot_economizer_path: default_plot_economizer_path(),
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
        }
    }
}

impl BackendConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("backend.base_url", &self.base_url)?;

        for (name, path) in [
            ("backend.process_path", &self.process_path),
            ("backend.plot_path", &self.plot_path),
            ("backend.plot_economizer_path", &self.plot_economizer_path),
        ] {
            if path.trim().is_empty() {
                return Err(format!("{name} cannot be empty"));
            }
        }

        if self.timeout_seconds == 0 {
            return Err("backend.timeout_seconds must be > 0".to_string());
        }
        Ok(())
    }
}

/// Static asset host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Base URL under which `{model}.png` and `{model}_{tag}.pdf` are served
    #[serde(default = "default_assets_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_assets_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl AssetsConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("assets.base_url", &self.base_url)?;
        if self.timeout_seconds == 0 {
            return Err("assets.timeout_seconds must be > 0".to_string());
        }
        Ok(())
    }
}

/// Export output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving downloaded and generated files
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("output.directory cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{name} cannot be empty"));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(format!("{name} must start with http:// or https://"));
    }
    url::Url::parse(value).map_err(|e| format!("{name} is not a valid URL: {e}"))?;
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_process_path() -> String {
    "process".to_string()
}

fn default_plot_path() -> String {
    "plot".to_string()
}

fn default_plot_economizer_path() -> String {
    "plot_economizer".to_string()
}

fn default_assets_url() -> String {
    "http://127.0.0.1:5173/assets".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
