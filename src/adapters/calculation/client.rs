//! HTTP client for the calculation service
//!
//! Posts JSON to the `process`, `plot` and `plot_economizer` endpoints.

use super::models::{diagram_payload, service_error, DiagramKind};
use super::service::CalculationService;
use crate::config::BackendConfig;
use crate::domain::{CalculationError, FormInput, KhioneError, Result, ResultSet};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;
use url::Url;

/// reqwest-backed [`CalculationService`]
pub struct HttpCalculationClient {
    client: Client,
    process_url: Url,
    plot_url: Url,
    plot_economizer_url: Url,
}

impl HttpCalculationClient {
    /// Create a client for the configured endpoints
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an endpoint URL cannot be built or
    /// the HTTP client cannot be initialized.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification disabled for calculation service");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            KhioneError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            process_url: endpoint(&config.base_url, &config.process_path)?,
            plot_url: endpoint(&config.base_url, &config.plot_path)?,
            plot_economizer_url: endpoint(&config.base_url, &config.plot_economizer_path)?,
        })
    }

    /// URL of the calculation endpoint
    pub fn process_url(&self) -> &Url {
        &self.process_url
    }

    fn diagram_url(&self, kind: DiagramKind) -> &Url {
        match kind {
            DiagramKind::Primary => &self.plot_url,
            DiagramKind::Economizer => &self.plot_economizer_url,
        }
    }

    /// POST a JSON body and return the JSON object answer
    ///
    /// Structured `{error}` payloads are turned into service errors, whatever
    /// the HTTP status.
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &Url,
        body: &T,
    ) -> Result<Map<String, Value>> {
        tracing::debug!(url = %url, "Posting to calculation service");

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| CalculationError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CalculationError::ConnectionFailed(e.to_string()))?;

        let parsed = serde_json::from_str::<Value>(&text);

        if !status.is_success() {
            if let Ok(Value::Object(payload)) = &parsed {
                if let Some(message) = service_error(payload) {
                    return Err(CalculationError::Service(message).into());
                }
            }
            return Err(CalculationError::ConnectionFailed(format!(
                "{url} answered with status {status}"
            ))
            .into());
        }

        let payload = match parsed {
            Ok(Value::Object(payload)) => payload,
            Ok(other) => {
                return Err(CalculationError::InvalidResponse(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                ))
                .into())
            }
            Err(e) => return Err(CalculationError::InvalidResponse(e.to_string()).into()),
        };

        if let Some(message) = service_error(&payload) {
            return Err(CalculationError::Service(message).into());
        }

        Ok(payload)
    }
}

#[async_trait]
impl CalculationService for HttpCalculationClient {
    async fn calculate(&self, input: &FormInput) -> Result<ResultSet> {
        let payload = self.post_json(&self.process_url, input).await?;

        tracing::info!(
            model = %input.model,
            refrigerant = %input.refrigerant,
            fields = payload.len(),
            "Calculation completed"
        );

        Ok(ResultSet::new(payload))
    }

    async fn render_diagram(&self, kind: DiagramKind, results: &ResultSet) -> Result<String> {
        let payload = self.post_json(self.diagram_url(kind), results).await?;

        let image = diagram_payload(&payload, kind)
            .ok_or_else(|| CalculationError::MissingField(kind.response_field().to_string()))?;

        tracing::debug!(kind = %kind, encoded_len = image.len(), "Diagram rendered");
        Ok(image.to_string())
    }
}

/// Join an endpoint path onto a base URL, keeping any base path prefix
fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    let base = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|base| base.join(path.trim_start_matches('/')))
        .map_err(|e| {
            KhioneError::Configuration(format!("Invalid endpoint {base_url} + {path}: {e}"))
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
