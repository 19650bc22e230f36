//! Core business logic for Khione.
//!
//! # Modules
//!
//! - [`reconcile`] - Merge of form input and calculation results into display fields
//! - [`session`] - Session state: current input, last result, last error
//! - [`export`] - Report, diagram and document exports
//!
//! # Export Workflow
//!
//! 1. **Edit**: Apply user edits to the session input
//! 2. **Submit**: Send the input to the calculation service
//! 3. **Reconcile**: Derive the display fields from input and results
//! 4. **Export**: Snapshot the session and run one or more exports
//!
//! # Example
//!
//! ```rust,no_run
//! use khione::adapters::assets::{AssetRegistry, HttpAssetSource};
//! use khione::adapters::calculation::HttpCalculationClient;
//! use khione::adapters::download::DirectorySink;
//! use khione::config::KhioneConfig;
//! use khione::core::export::ExportOrchestrator;
//! use khione::core::session::Session;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = KhioneConfig::default();
//! let service = Arc::new(HttpCalculationClient::new(&config.backend)?);
//!
//! let mut session = Session::new(config.input.clone());
//! session.apply_edit("evap_temp", "-5")?;
//! session.submit(service.as_ref()).await.ok();
//!
//! let orchestrator = ExportOrchestrator::new(
//!     service,
//!     Arc::new(HttpAssetSource::new(&config.assets)?),
//!     AssetRegistry::default(),
//!     Arc::new(DirectorySink::new(&config.output.directory)),
//! );
//! let outcome = orchestrator.export_report(&session.snapshot()).await;
//! println!("Saved: {}", outcome.is_saved());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod reconcile;
pub mod session;
