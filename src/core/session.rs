//! Session state
//!
//! A [`Session`] owns the current [`FormInput`], the most recent
//! [`ResultSet`] and the last error notice. Input edits only touch the
//! input; submissions only touch the result and the error. Exports read a
//! [`SessionSnapshot`] taken when they are invoked.

use crate::adapters::calculation::CalculationService;
use crate::core::export::notice::{Notice, NoticeKind};
use crate::core::reconcile::reconcile;
use crate::domain::{DisplayField, FormInput, Result, ResultSet};

/// State read by every export, captured at invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub input: FormInput,
    pub result: Option<ResultSet>,
}

/// Mutable state of one viewer session
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: FormInput,
    result: Option<ResultSet>,
    error: Option<Notice>,
}

impl Session {
    pub fn new(input: FormInput) -> Self {
        Self {
            input,
            result: None,
            error: None,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn result(&self) -> Option<&ResultSet> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }

    /// Apply one raw user edit to the input
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown keys or unparseable values;
    /// the input is left untouched in that case.
    pub fn apply_edit(&mut self, key: &str, raw: &str) -> Result<()> {
        self.input.apply_edit(key, raw)
    }

    /// Reconciled view of the current input and last result
    pub fn fields(&self) -> Vec<DisplayField> {
        reconcile(&self.input, self.result.as_ref())
    }

    /// Submit the current input to the calculation service
    ///
    /// A successful response replaces the previous result and clears the
    /// error. A service error clears the result; a connection failure keeps
    /// it. Either way the notice is stored and returned.
    pub async fn submit(&mut self, service: &dyn CalculationService) -> std::result::Result<(), Notice> {
        match service.calculate(&self.input).await {
            Ok(result) => {
                tracing::info!(fields = result.len(), model = %self.input.model, "Calculation completed");
                self.result = Some(result);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                let notice = Notice::from_error(&e);
                tracing::warn!(error = %e, "Calculation failed");
                if notice.kind != NoticeKind::Connection {
                    self.result = None;
                }
                self.error = Some(notice.clone());
                Err(notice)
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            input: self.input.clone(),
            result: self.result.clone(),
        }
    }
}
