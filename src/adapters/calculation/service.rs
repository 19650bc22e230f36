//! Calculation service trait definition
//!
//! The `CalculationService` trait separates the export pipelines from the
//! HTTP transport so they can run against any implementation of the
//! request/response contract.

use super::models::DiagramKind;
use crate::domain::{FormInput, Result, ResultSet};
use async_trait::async_trait;

/// Remote calculation and plotting service
///
/// Each call issues exactly one request. Implementations never retry and
/// never cache.
///
/// # Example
///
/// ```no_run
/// use khione::adapters::calculation::{CalculationService, HttpCalculationClient};
/// use khione::config::BackendConfig;
/// use khione::domain::FormInput;
///
/// # async fn example() -> khione::domain::Result<()> {
/// let client = HttpCalculationClient::new(&BackendConfig::default())?;
/// let results = client.calculate(&FormInput::default()).await?;
/// println!("{} result fields", results.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait CalculationService: Send + Sync {
    /// Submit operating parameters and return the computed results
    ///
    /// # Errors
    ///
    /// - [`CalculationError::ConnectionFailed`](crate::domain::CalculationError::ConnectionFailed)
    ///   when no usable response arrives
    /// - [`CalculationError::Service`](crate::domain::CalculationError::Service)
    ///   with the service's message when it reports an error
    /// - [`CalculationError::InvalidResponse`](crate::domain::CalculationError::InvalidResponse)
    ///   when the body is not a JSON object
    async fn calculate(&self, input: &FormInput) -> Result<ResultSet>;

    /// Render a diagram from a full result set
    ///
    /// Returns the base64-encoded JPEG found in the response.
    ///
    /// # Errors
    ///
    /// Same as [`calculate`](Self::calculate), plus
    /// [`CalculationError::MissingField`](crate::domain::CalculationError::MissingField)
    /// when the response has no image for `kind`.
    async fn render_diagram(&self, kind: DiagramKind, results: &ResultSet) -> Result<String>;
}
