//! Trigger control state for document downloads
//!
//! While a download is in flight its control is disabled and shows
//! [`DOWNLOADING_LABEL`]. The [`InFlight`] guard restores the original label
//! and re-enables the control when dropped, whatever the outcome.

/// Label shown while a download is in flight
pub const DOWNLOADING_LABEL: &str = "Downloading...";

/// A user-facing trigger: label plus enabled flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadControl {
    label: String,
    enabled: bool,
}

impl DownloadControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Mark the control busy until the returned guard is dropped
    pub fn begin(&mut self) -> InFlight<'_> {
        let original_label = std::mem::replace(&mut self.label, DOWNLOADING_LABEL.to_string());
        self.enabled = false;
        tracing::trace!(label = %original_label, "Control disabled");
        InFlight {
            control: self,
            original_label,
        }
    }
}

/// Busy state of a [`DownloadControl`]
#[derive(Debug)]
pub struct InFlight<'a> {
    control: &'a mut DownloadControl,
    original_label: String,
}

impl InFlight<'_> {
    /// Current label (the busy label while in flight)
    pub fn label(&self) -> &str {
        self.control.label()
    }

    pub fn is_enabled(&self) -> bool {
        self.control.is_enabled()
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.control.label = std::mem::take(&mut self.original_label);
        self.control.enabled = true;
        tracing::trace!(label = %self.control.label, "Control restored");
    }
}
