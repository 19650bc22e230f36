//! External system integrations for Khione.
//!
//! This module provides adapters for integrating with external systems:
//!
//! - [`calculation`] - Remote calculation and plotting service
//! - [`assets`] - Static asset host (reference images, drawings, manuals)
//! - [`download`] - Delivery of finished export files
//!
//! # Design Pattern
//!
//! Each adapter sits behind a trait ([`calculation::CalculationService`],
//! [`assets::AssetSource`], [`download::DownloadSink`]) so the export
//! pipelines can be exercised with in-process implementations.
//!
//! ```rust,no_run
//! use khione::adapters::calculation::{CalculationService, HttpCalculationClient};
//! use khione::config::BackendConfig;
//! use khione::domain::FormInput;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BackendConfig {
//!     base_url: "https://calc.example.com/api".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = HttpCalculationClient::new(&config)?;
//! let results = client.calculate(&FormInput::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod calculation;
pub mod download;
