//! Export orchestrator
//!
//! Runs the three export operations: the PDF report, the two diagram
//! variants and the static documents. Each operation runs its steps strictly
//! in sequence and converts any failure into an [`ExportOutcome::Aborted`]
//! notice; nothing is delivered unless every step succeeded.

use crate::adapters::assets::{AssetRegistry, AssetSource, DocumentKind};
use crate::adapters::calculation::{CalculationService, DiagramKind};
use crate::adapters::download::DownloadSink;
use crate::core::export::control::DownloadControl;
use crate::core::export::notice::{ExportOutcome, Notice};
use crate::core::export::report::{ReportBuilder, REPORT_FILENAME};
use crate::core::reconcile::{reconcile, resolve_model};
use crate::core::session::SessionSnapshot;
use crate::domain::{
    AssetError, CalculationError, CompressorModel, FormInput, KhioneError, Result,
};
use crate::{log_export_aborted, log_export_complete, log_export_start};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use printpdf::image_crate::{self, DynamicImage};
use std::sync::Arc;
use std::time::Instant;

/// Notice shown when a static document cannot be downloaded
pub const DOCUMENT_FAILED_MESSAGE: &str =
    "Download failed. Make sure the PDF exists and try again.";

/// Coordinates exports against the calculation service, the asset host and
/// the download sink
///
/// Cheap to clone; clones share the underlying adapters so several exports
/// can run at once.
#[derive(Clone)]
pub struct ExportOrchestrator {
    service: Arc<dyn CalculationService>,
    assets: Arc<dyn AssetSource>,
    registry: AssetRegistry,
    sink: Arc<dyn DownloadSink>,
    report: ReportBuilder,
}

impl ExportOrchestrator {
    pub fn new(
        service: Arc<dyn CalculationService>,
        assets: Arc<dyn AssetSource>,
        registry: AssetRegistry,
        sink: Arc<dyn DownloadSink>,
    ) -> Self {
        Self {
            service,
            assets,
            registry,
            sink,
            report: ReportBuilder::default(),
        }
    }

    /// Use a custom report builder
    pub fn with_report_builder(mut self, report: ReportBuilder) -> Self {
        self.report = report;
        self
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Export the PDF report for a session snapshot
    ///
    /// The reference image of the resolved model is fetched and decoded
    /// before the document is built. An unknown echoed model or a failed
    /// image load writes the report without an image.
    pub async fn export_report(&self, snapshot: &SessionSnapshot) -> ExportOutcome {
        let start = Instant::now();
        let model = resolve_model(&snapshot.input, snapshot.result.as_ref());
        log_export_start!("report", model.map_or("unknown", |m| m.as_str()));

        let fields = reconcile(&snapshot.input, snapshot.result.as_ref());
        let image = match model {
            Some(model) => self.load_reference_image(model).await,
            None => {
                tracing::warn!("Echoed compressor model is unknown, writing report without image");
                None
            }
        };

        let outcome = match self.report.render(&fields, image.as_ref()) {
            Ok(bytes) => self.deliver(REPORT_FILENAME, bytes).await,
            Err(e) => Err(e),
        };
        finish("report", outcome, start)
    }

    /// Recalculate `input` and export the rendered diagram
    ///
    /// A calculation error aborts before any rendering request is issued.
    pub async fn export_diagram(&self, kind: DiagramKind, input: &FormInput) -> ExportOutcome {
        let start = Instant::now();
        let export = format!("diagram:{}", kind.response_field());
        log_export_start!(export, input.model);

        let outcome = match self.fetch_diagram(kind, input).await {
            Ok(bytes) => {
                let filename = format!("{}{}", input.model, kind.file_suffix());
                self.deliver(&filename, bytes).await
            }
            Err(e) => Err(e),
        };

        let outcome = outcome.map_err(|e| match &e {
            KhioneError::Calculation(CalculationError::MissingField(_)) => Notice::from_error(&e)
                .with_message(format!("No {} image found in API response.", kind.title())),
            _ => Notice::from_error(&e),
        });
        finish_with_notice(&export, outcome, start)
    }

    /// Download a static document while `control` shows the busy state
    ///
    /// The control is restored when this returns, whatever the outcome.
    pub async fn export_document(
        &self,
        model: CompressorModel,
        kind: DocumentKind,
        control: &mut DownloadControl,
    ) -> ExportOutcome {
        let start = Instant::now();
        let export = format!("document:{kind}");
        log_export_start!(export, model);

        let _in_flight = control.begin();
        let name = self.registry.document(model, kind);

        let outcome = match self.assets.fetch(&name).await {
            Ok(bytes) => self.deliver(&name, bytes).await,
            Err(e) => Err(e),
        };

        let outcome = outcome.map_err(|e| {
            Notice::from_error(&e)
                .with_message(DOCUMENT_FAILED_MESSAGE)
                .with_detail(e.to_string())
        });
        finish_with_notice(&export, outcome, start)
    }

    async fn fetch_diagram(&self, kind: DiagramKind, input: &FormInput) -> Result<Vec<u8>> {
        let results = self.service.calculate(input).await?;
        tracing::debug!(fields = results.len(), "Calculation completed for diagram");

        let payload = self.service.render_diagram(kind, &results).await?;
        decode_image_payload(&payload)
    }

    async fn load_reference_image(&self, model: CompressorModel) -> Option<DynamicImage> {
        let name = self.registry.reference_image(model)?.to_string();

        let loaded = match self.assets.fetch(&name).await {
            Ok(bytes) => decode_image(name.clone(), bytes).await,
            Err(e) => Err(e),
        };

        match loaded {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!(asset = %name, error = %e, "Reference image unavailable, writing report without it");
                None
            }
        }
    }

    async fn deliver(&self, filename: &str, bytes: Vec<u8>) -> Result<std::path::PathBuf> {
        self.sink.deliver(filename, bytes).await
    }
}

/// Decode a base64 image payload from the calculation service
///
/// # Errors
///
/// Returns [`CalculationError::InvalidResponse`] when the payload is not
/// valid base64.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(payload.trim())
        .map_err(|e| CalculationError::InvalidResponse(format!("Image payload is not valid base64: {e}")).into())
}

async fn decode_image(name: String, bytes: Vec<u8>) -> Result<DynamicImage> {
    tokio::task::spawn_blocking(move || {
        image_crate::load_from_memory(&bytes).map_err(|e| {
            KhioneError::from(AssetError::Decode {
                path: name,
                message: e.to_string(),
            })
        })
    })
    .await
    .map_err(|e| KhioneError::Other(format!("Image decode task failed: {e}")))?
}

fn finish(export: &str, outcome: Result<std::path::PathBuf>, start: Instant) -> ExportOutcome {
    finish_with_notice(export, outcome.map_err(|e| Notice::from_error(&e)), start)
}

fn finish_with_notice(
    export: &str,
    outcome: std::result::Result<std::path::PathBuf, Notice>,
    start: Instant,
) -> ExportOutcome {
    match outcome {
        Ok(path) => {
            log_export_complete!(export, path.display(), start.elapsed());
            ExportOutcome::Saved { path }
        }
        Err(notice) => {
            if let Some(detail) = &notice.detail {
                tracing::debug!(export = %export, detail = %detail, "Export failure detail");
            }
            log_export_aborted!(export, notice);
            ExportOutcome::Aborted(notice)
        }
    }
}
