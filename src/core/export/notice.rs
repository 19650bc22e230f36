//! User-visible notices and export outcomes
//!
//! Export operations never return errors. Every failure is caught at the
//! boundary of the operation and turned into a [`Notice`].

use crate::domain::{AssetError, CalculationError, KhioneError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Message shown when the calculation service cannot be reached
pub const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to backend";

/// Category of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// No response from a remote service
    Connection,
    /// The calculation service reported an error
    Service,
    /// A response lacked a field or could not be decoded
    ContractViolation,
    /// A static asset was missing or could not be fetched
    AssetNotFound,
    /// Local failure (writing the file, building the document)
    Local,
}

/// User-visible failure message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,

    /// Text shown to the user
    pub message: String,

    /// Technical detail for the logs
    pub detail: Option<String>,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    /// Attach technical detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Replace the user-facing message, keeping kind and detail
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Classify an error; service messages are kept verbatim
    pub fn from_error(err: &KhioneError) -> Self {
        match err {
            KhioneError::Calculation(CalculationError::ConnectionFailed(detail)) => {
                Self::new(NoticeKind::Connection, CONNECTION_FAILED_MESSAGE).with_detail(detail)
            }
            KhioneError::Calculation(CalculationError::Service(message)) => {
                Self::new(NoticeKind::Service, message.clone())
            }
            KhioneError::Calculation(e @ CalculationError::InvalidResponse(_))
            | KhioneError::Calculation(e @ CalculationError::MissingField(_)) => {
                Self::new(NoticeKind::ContractViolation, e.to_string())
            }
            KhioneError::Asset(e @ (AssetError::NotFound(_) | AssetError::FetchFailed { .. })) => {
                Self::new(NoticeKind::AssetNotFound, e.to_string())
            }
            KhioneError::Asset(e @ AssetError::ConnectionFailed(_)) => {
                Self::new(NoticeKind::Connection, e.to_string())
            }
            KhioneError::Asset(e @ AssetError::Decode { .. }) => {
                Self::new(NoticeKind::ContractViolation, e.to_string())
            }
            other => Self::new(NoticeKind::Local, other.to_string()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of one export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The artifact was delivered
    Saved { path: PathBuf },
    /// Nothing was delivered
    Aborted(Notice),
}

impl ExportOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ExportOutcome::Saved { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Saved { path } => Some(path),
            ExportOutcome::Aborted(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            ExportOutcome::Saved { .. } => None,
            ExportOutcome::Aborted(notice) => Some(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failure_notice() {
        let err: KhioneError = CalculationError::ConnectionFailed("refused".to_string()).into();
        let notice = Notice::from_error(&err);
        assert_eq!(notice.kind, NoticeKind::Connection);
        assert_eq!(notice.message, "Failed to connect to backend");
        assert_eq!(notice.detail.as_deref(), Some("refused"));
    }

    #[test]
    fn test_service_notice_is_verbatim() {
        let err: KhioneError = CalculationError::Service("invalid refrigerant".to_string()).into();
        let notice = Notice::from_error(&err);
        assert_eq!(notice.kind, NoticeKind::Service);
        assert_eq!(notice.to_string(), "invalid refrigerant");
    }

    #[test]
    fn test_missing_field_is_contract_violation() {
        let err: KhioneError = CalculationError::MissingField("ph_diagram".to_string()).into();
        assert_eq!(Notice::from_error(&err).kind, NoticeKind::ContractViolation);
    }

    #[test]
    fn test_asset_notices() {
        let err: KhioneError = AssetError::NotFound("KRS4115_Dr.pdf".to_string()).into();
        assert_eq!(Notice::from_error(&err).kind, NoticeKind::AssetNotFound);

        let err: KhioneError = AssetError::ConnectionFailed("timeout".to_string()).into();
        assert_eq!(Notice::from_error(&err).kind, NoticeKind::Connection);
    }

    #[test]
    fn test_local_notice() {
        let err = KhioneError::Io("disk full".to_string());
        let notice = Notice::from_error(&err);
        assert_eq!(notice.kind, NoticeKind::Local);
        assert!(notice.message.contains("disk full"));
    }

    #[test]
    fn test_outcome_accessors() {
        let saved = ExportOutcome::Saved {
            path: PathBuf::from("out/report.pdf"),
        };
        assert!(saved.is_saved());
        assert_eq!(saved.path(), Some(Path::new("out/report.pdf")));

        let aborted = ExportOutcome::Aborted(Notice::new(NoticeKind::Service, "boom"));
        assert!(!aborted.is_saved());
        assert_eq!(aborted.notice().map(|n| n.message.as_str()), Some("boom"));
    }
}
