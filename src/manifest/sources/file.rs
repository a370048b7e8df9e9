//! Manifest source reading a `versions.json` already on disk

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::manifest::error::ManifestError;
use crate::manifest::source::ManifestSource;
use crate::manifest::types::VersionManifest;

pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ManifestSource for FileManifestSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_manifest(&self) -> Result<VersionManifest, ManifestError> {
        debug!("Reading version manifest from {:?}", self.path);

        let content = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|e| ManifestError::InvalidManifest(e.to_string()))
    }
}
