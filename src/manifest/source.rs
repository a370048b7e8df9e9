//! Source trait for loading the version manifest

#[cfg(test)]
use mockall::automock;

use crate::manifest::error::ManifestError;
use crate::manifest::types::VersionManifest;

/// Trait for loading the version manifest
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Human readable location, used in log messages
    fn location(&self) -> String;

    /// Loads the manifest once
    ///
    /// # Returns
    /// * `Ok(VersionManifest)` - The manifest as published
    /// * `Err(ManifestError)` - If it cannot be retrieved or decoded
    async fn fetch_manifest(&self) -> Result<VersionManifest, ManifestError>;
}
