//! Manifest source fetching `versions.json` from the documentation site

use tracing::{debug, warn};

use crate::config::BannerConfig;
use crate::manifest::error::ManifestError;
use crate::manifest::source::ManifestSource;
use crate::manifest::types::VersionManifest;

/// Fetches `{baseUrl}/versions.json` with a single GET
///
/// No retries and no timeout: a hung request delays the banner indefinitely.
pub struct HttpManifestSource {
    client: reqwest::Client,
    url: String,
}

impl HttpManifestSource {
    /// Creates a source for the manifest published under the config's base URL
    pub fn new(config: &BannerConfig) -> Self {
        Self::with_url(&config.manifest_url())
    }

    /// Creates a source for an explicit manifest URL
    pub fn with_url(url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("docs-versioning")
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ManifestSource for HttpManifestSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch_manifest(&self) -> Result<VersionManifest, ManifestError> {
        debug!("Fetching version manifest from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Manifest request returned status {}: {}", status, self.url);
            return Err(ManifestError::HttpStatus {
                status,
                url: self.url.clone(),
            });
        }

        response
            .json::<VersionManifest>()
            .await
            .map_err(|e| ManifestError::InvalidManifest(e.to_string()))
    }
}
