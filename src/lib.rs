// Khione - Compressor Results Viewer and Exporter
// Copyright (c) 2025 Khione Contributors
// Licensed under the MIT License

//! # Khione - Compressor Results Viewer and Exporter
//!
//! Khione submits compressor operating parameters to a remote calculation
//! service, merges the returned results with the user's input into a single
//! labelled view, and exports that view as a PDF report, pressure-enthalpy
//! diagrams, or the model's technical documents.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Calculating** results through the calculation service HTTP API
//! - **Reconciling** form input and results into ordered display fields
//! - **Exporting** reports, diagrams and static documents
//! - **Delivering** every export atomically into an output directory
//!
//! ## Architecture
//!
//! Khione follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (reconciliation, session, exports)
//! - [`adapters`] - External integrations (calculation service, asset host, downloads)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use khione::adapters::calculation::HttpCalculationClient;
//! use khione::config::load_config_or_default;
//! use khione::core::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("khione.toml")?;
//!     let client = HttpCalculationClient::new(&config.backend)?;
//!
//!     let mut session = Session::new(config.input.clone());
//!     session.apply_edit("cond_temp", "35")?;
//!     if let Err(notice) = session.submit(&client).await {
//!         eprintln!("{notice}");
//!     }
//!
//!     for field in session.fields() {
//!         println!("{field}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Reconciliation
//!
//! Results are keyed by display label, input by parameter name. The
//! reconciled view lists result labels first, then any input labels not
//! already present, skipping the internal enthalpy keys. Temperatures and
//! speed always show the submitted input.
//!
//! ```rust
//! use khione::core::reconcile::reconcile;
//! use khione::domain::{FormInput, ResultSet};
//!
//! let results: ResultSet = serde_json::from_str(
//!     r#"{"Compressor Model": "KRS4115", "h1": 5, "Discharge Pressure": 12.34}"#,
//! ).unwrap();
//! let fields = reconcile(&FormInput::default(), Some(&results));
//!
//! assert!(fields.iter().any(|f| f.to_string() == "Discharge Pressure: 12.34"));
//! assert!(fields.iter().all(|f| f.label != "h1"));
//! ```
//!
//! ## Error Handling
//!
//! Fallible library calls return [`domain::KhioneError`]. Export operations
//! never fail: they return a [`core::export::ExportOutcome`] whose aborted
//! variant carries the notice shown to the user.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
