//! Configuration management for Khione.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Khione uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `KHIONE_*` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`BackendConfig`] - Calculation and plotting service endpoints
//! - [`AssetsConfig`] - Static asset host for images and documents
//! - [`OutputConfig`] - Export destination directory
//! - `input` - Starting operating parameters ([`crate::domain::FormInput`])
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [backend]
//! base_url = "https://calc.example.com/api"
//!
//! [assets]
//! base_url = "https://calc.example.com/assets"
//!
//! [output]
//! directory = "exports"
//!
//! [input]
//! model = "KRS4150"
//! refrigerant = "R134a"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, AssetsConfig, BackendConfig, KhioneConfig, LoggingConfig, OutputConfig,
};
