//! Version manifest layer
//!
//! The manifest (`versions.json`) lists every published documentation version
//! and names the stable one. It is fetched once per render and dropped after.
//!
//! # Modules
//!
//! - [`types`]: The `VersionManifest` shape
//! - [`source`]: `ManifestSource` trait for loading a manifest
//! - [`sources`]: Concrete sources (HTTP, local file)
//! - [`error`]: Error type for manifest loading

pub mod error;
pub mod source;
pub mod sources;
pub mod types;

pub use error::ManifestError;
pub use source::ManifestSource;
pub use types::VersionManifest;
