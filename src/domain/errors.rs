//! Domain error types
//!
//! This module defines the error hierarchy for Khione.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Khione error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum KhioneError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Calculation service errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Static asset errors
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Export pipeline errors (report synthesis, file packaging)
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Calculation service errors
///
/// Errors that occur when talking to the remote calculation and plotting
/// service. These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// No usable response was received (transport failure, timeout, non-success status)
    #[error("Failed to connect to backend: {0}")]
    ConnectionFailed(String),

    /// The service answered with a structured `{error}` payload
    #[error("{0}")]
    Service(String),

    /// The response body could not be interpreted
    #[error("Invalid response from service: {0}")]
    InvalidResponse(String),

    /// The response lacks a field the caller depends on
    #[error("Response is missing expected field '{0}'")]
    MissingField(String),
}

/// Static asset errors
///
/// Errors that occur when fetching reference images and technical documents.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset host answered 404
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The asset host answered with another non-success status
    #[error("Failed to fetch asset {path}: {status} {message}")]
    FetchFailed {
        path: String,
        status: u16,
        message: String,
    },

    /// The asset host could not be reached
    #[error("Failed to connect to asset host: {0}")]
    ConnectionFailed(String),

    /// The asset bytes could not be decoded
    #[error("Failed to decode asset {path}: {message}")]
    Decode { path: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for KhioneError {
    fn from(err: std::io::Error) -> Self {
        KhioneError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for KhioneError {
    fn from(err: serde_json::Error) -> Self {
        KhioneError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for KhioneError {
    fn from(err: toml::de::Error) -> Self {
        KhioneError::Configuration(format!("TOML parse error: {err}"))
    }
}
