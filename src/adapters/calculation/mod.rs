//! Calculation service adapter
//!
//! This module provides the integration with the remote calculation and
//! plotting service: the service trait, its HTTP implementation, and the
//! payload helpers shared by both.

pub mod client;
pub mod models;
mod service;

pub use client::HttpCalculationClient;
pub use models::DiagramKind;
pub use service::CalculationService;
