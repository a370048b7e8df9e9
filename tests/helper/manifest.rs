//! Manifest fixtures

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use docs_versioning::manifest::{ManifestError, ManifestSource, VersionManifest};
use mockito::{Mock, Server, ServerGuard};
use serde_json::json;

/// Builds a `versions.json` body
pub fn manifest_json(stable: Option<&str>, dev: &[&str], released: &[&str]) -> String {
    json!({
        "stable": stable,
        "dev": dev,
        "released": released,
    })
    .to_string()
}

/// Starts a server answering `GET /versions.json` once with the given status and body
pub async fn mock_manifest_server(status: usize, body: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/versions.json")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create_async()
        .await;
    (server, mock)
}

/// Wraps a source and records when a manifest has been handed out
pub struct TrackedSource<S> {
    inner: S,
    delivered: Arc<AtomicBool>,
}

impl<S: ManifestSource> TrackedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            delivered: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn delivered(&self) -> bool {
        self.delivered.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: ManifestSource> ManifestSource for TrackedSource<S> {
    fn location(&self) -> String {
        self.inner.location()
    }

    async fn fetch_manifest(&self) -> Result<VersionManifest, ManifestError> {
        let manifest = self.inner.fetch_manifest().await?;
        self.delivered.store(true, Ordering::SeqCst);
        Ok(manifest)
    }
}
