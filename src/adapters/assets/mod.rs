//! Static asset adapter
//!
//! Reference images and technical documents served by the asset host.

pub mod registry;
pub mod source;

pub use registry::{AssetRegistry, DocumentKind};
pub use source::{AssetSource, HttpAssetSource};
