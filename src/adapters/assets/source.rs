//! Asset fetching
//!
//! [`AssetSource`] abstracts where reference images and technical documents
//! come from; [`HttpAssetSource`] reads them from the static asset host.

use crate::config::AssetsConfig;
use crate::domain::{AssetError, KhioneError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use url::Url;

/// Source of static asset bytes
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch one asset by name
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] for a missing asset,
    /// [`AssetError::FetchFailed`] for other non-success answers and
    /// [`AssetError::ConnectionFailed`] when the host cannot be reached.
    async fn fetch(&self, name: &str) -> Result<Vec<u8>>;
}

/// reqwest-backed [`AssetSource`]
pub struct HttpAssetSource {
    client: Client,
    base_url: Url,
}

impl HttpAssetSource {
    /// Create a source for the configured asset host
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid base URL or if the HTTP
    /// client cannot be initialized.
    pub fn new(config: &AssetsConfig) -> Result<Self> {
        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|e| {
            KhioneError::Configuration(format!("Invalid assets.base_url {base}: {e}"))
        })?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                KhioneError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, base_url })
    }

    fn url_for(&self, name: &str) -> Result<Url> {
        self.base_url
            .join(name)
            .map_err(|e| KhioneError::Validation(format!("Invalid asset name {name}: {e}")))
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        let url = self.url_for(name)?;
        tracing::debug!(url = %url, "Fetching asset");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AssetError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AssetError::NotFound(name.to_string()).into());
        }
        if !status.is_success() {
            return Err(AssetError::FetchFailed {
                path: name.to_string(),
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            }
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AssetError::ConnectionFailed(e.to_string()))?;

        tracing::debug!(asset = name, size = bytes.len(), "Asset fetched");
        Ok(bytes.to_vec())
    }
}
