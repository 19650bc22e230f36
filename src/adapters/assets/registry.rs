//! Static asset lookup
//!
//! Maps compressor models to their reference image and technical documents.

use crate::domain::{CompressorModel, KhioneError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Technical documents published per model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Drawing,
    Manual,
}

impl DocumentKind {
    /// Tag used in asset names
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentKind::Drawing => "Dr",
            DocumentKind::Manual => "MA",
        }
    }

    /// Label of the control that downloads this document
    pub fn control_label(&self) -> &'static str {
        match self {
            DocumentKind::Drawing => "Download Drawing",
            DocumentKind::Manual => "Download Manual",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Drawing => f.write_str("drawing"),
            DocumentKind::Manual => f.write_str("manual"),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = KhioneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "drawing" | "dr" => Ok(DocumentKind::Drawing),
            "manual" | "ma" => Ok(DocumentKind::Manual),
            _ => Err(KhioneError::Validation(format!(
                "Unknown document kind: {s}. Use 'drawing' or 'manual'"
            ))),
        }
    }
}

/// Read-only table of asset names
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    images: HashMap<CompressorModel, String>,
}

impl Default for AssetRegistry {
    /// Registry with a reference image for every model
    fn default() -> Self {
        Self::with_images(CompressorModel::ALL)
    }
}

impl AssetRegistry {
    /// Registry with reference images for the given models only
    pub fn with_images(models: impl IntoIterator<Item = CompressorModel>) -> Self {
        let images = models
            .into_iter()
            .map(|model| (model, format!("{model}.png")))
            .collect();
        Self { images }
    }

    /// Asset name of the model's reference image, if one is published
    pub fn reference_image(&self, model: CompressorModel) -> Option<&str> {
        self.images.get(&model).map(String::as_str)
    }

    /// Asset name of a technical document; also used as the download name
    pub fn document(&self, model: CompressorModel, kind: DocumentKind) -> String {
        format!("{model}_{}.pdf", kind.tag())
    }
}
