//! Fetches the manifest and renders once the document has loaded

use tracing::{debug, error, info};

use crate::banner::classify::PageStatus;
use crate::banner::error::RenderError;
use crate::banner::render::render;
use crate::config::BannerConfig;
use crate::document::{Document, LoadSignal, LoadState};
use crate::manifest::{ManifestError, ManifestSource};

/// Result of a load-and-render pass
#[derive(Debug)]
pub enum LoadOutcome {
    /// The manifest arrived and the document was rendered
    Rendered(PageStatus),
    /// The manifest could not be loaded; the document was left untouched
    Skipped(ManifestError),
}

/// Loads the manifest and renders the version list and banner
///
/// Rendering happens once, after both the manifest has arrived and the
/// document has loaded. A manifest failure is logged and swallowed so the page
/// simply shows no banner. A missing render target is returned as an error.
pub async fn load_and_render<D: Document + ?Sized>(
    config: &BannerConfig,
    source: &dyn ManifestSource,
    document: &mut D,
    load_signal: &LoadSignal,
) -> Result<LoadOutcome, RenderError> {
    let manifest = match source.fetch_manifest().await {
        Ok(manifest) => manifest,
        Err(e) => {
            error!("Failed to load manifest from {}: {}", source.location(), e);
            return Ok(LoadOutcome::Skipped(e));
        }
    };

    debug!(
        "Loaded manifest from {}: {} dev, {} released, stable {:?}",
        source.location(),
        manifest.dev.len(),
        manifest.released.len(),
        manifest.stable
    );

    if load_signal.state() == LoadState::Loading {
        debug!("Document still loading, deferring render");
        load_signal.wait_loaded().await;
    }

    let status = render(config, &manifest, document)?;
    info!(
        "Rendered {} versions for {} ({})",
        manifest.dev.len() + manifest.released.len(),
        config.current_tag(),
        status
    );

    Ok(LoadOutcome::Rendered(status))
}
