//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output filtered by level or `RUST_LOG`
//! - JSON-formatted local file logs with rotation
//!
//! # Example
//!
//! ```no_run
//! use khione::logging::init_logging;
//! use khione::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export operation
///
/// # Example
///
/// ```no_run
/// use khione::log_export_start;
///
/// log_export_start!("report", "KRS4115");
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($export:expr, $model:expr) => {
        tracing::info!(
            export = %$export,
            model = %$model,
            "Starting export"
        );
    };
}

/// Log the completion of an export operation
///
/// # Example
///
/// ```no_run
/// use khione::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!("report", "out/report.pdf", Duration::from_millis(120));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($export:expr, $path:expr, $duration:expr) => {
        tracing::info!(
            export = %$export,
            path = %$path,
            duration_ms = $duration.as_millis(),
            "Export completed"
        );
    };
}

/// Log an aborted export with the notice shown to the user
///
/// # Example
///
/// ```no_run
/// use khione::log_export_aborted;
///
/// log_export_aborted!("diagram", "invalid refrigerant");
/// ```
#[macro_export]
macro_rules! log_export_aborted {
    ($export:expr, $notice:expr) => {
        tracing::warn!(
            export = %$export,
            notice = %$notice,
            "Export aborted"
        );
    };
}
