//! Export operations
//!
//! This module provides the user-triggered exports:
//! - PDF report synthesis from the reconciled fields
//! - Diagram export through the remote plotting endpoints
//! - Static document download with busy-state control handling
//!
//! Every export returns an [`ExportOutcome`]; failures become notices.

pub mod control;
pub mod notice;
pub mod orchestrator;
pub mod report;

pub use control::{DownloadControl, InFlight, DOWNLOADING_LABEL};
pub use notice::{ExportOutcome, Notice, NoticeKind, CONNECTION_FAILED_MESSAGE};
pub use orchestrator::{decode_image_payload, ExportOrchestrator, DOCUMENT_FAILED_MESSAGE};
pub use report::{ReportBuilder, ReportLayout, ReportPlan, REPORT_FILENAME, REPORT_TITLE};
