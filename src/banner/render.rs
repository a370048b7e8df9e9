//! Writes the version list and banner into a document

use tracing::{debug, warn};

use crate::banner::classify::{PageStatus, classify};
use crate::banner::error::RenderError;
use crate::config::{BannerConfig, VERSION_BANNER_SELECTOR, VERSION_LIST_SELECTOR};
use crate::document::{Document, Element, Node};
use crate::manifest::VersionManifest;

const DEVELOPMENT_NOTICE: &str = "You are viewing the documentation for the development version. ";
const OUTDATED_NOTICE: &str = "You are viewing the documentation for an old version. ";

/// Renders the version list and the banner for the viewed version
///
/// Both targets are located before anything is written, so a missing target
/// leaves the document untouched.
pub fn render<D: Document + ?Sized>(
    config: &BannerConfig,
    manifest: &VersionManifest,
    document: &mut D,
) -> Result<PageStatus, RenderError> {
    if document.version_list().is_none() {
        return Err(RenderError::MissingElement(VERSION_LIST_SELECTOR));
    }
    if document.version_banner().is_none() {
        return Err(RenderError::MissingElement(VERSION_BANNER_SELECTOR));
    }

    let list = document
        .version_list()
        .ok_or(RenderError::MissingElement(VERSION_LIST_SELECTOR))?;
    for tag in manifest.tags() {
        list.append_child(version_entry(config, manifest, tag));
    }

    let status = classify(config.current_version(), manifest);
    debug!(
        "Version {} classified as {}",
        config.current_tag(),
        status
    );

    let banner = document
        .version_banner()
        .ok_or(RenderError::MissingElement(VERSION_BANNER_SELECTOR))?;
    match status {
        PageStatus::Development => {
            banner.add_class("dev");
            banner.append_text(DEVELOPMENT_NOTICE);
            if let Some(stable) = manifest.stable.as_deref() {
                banner.append_child(latest_stable_link(config, stable));
            }
        }
        PageStatus::Outdated => {
            banner.add_class("outdated");
            banner.append_text(OUTDATED_NOTICE);
            match manifest.stable.as_deref() {
                Some(stable) => banner.append_child(latest_stable_link(config, stable)),
                None => warn!(
                    "{} is released but the manifest names no stable version",
                    config.current_tag()
                ),
            }
        }
        PageStatus::Current => {}
    }

    Ok(status)
}

/// `<dd><a href="{baseUrl}/en/{tag}">{tag}</a></dd>`, marked when stable
fn version_entry(config: &BannerConfig, manifest: &VersionManifest, tag: &str) -> Element {
    let text = if manifest.is_stable(tag) {
        format!("{} (stable)", tag)
    } else {
        tag.to_string()
    };

    Element::new("dd").with_child(
        Element::new("a")
            .with_attribute("href", config.version_link(tag))
            .with_child(Node::text(text)),
    )
}

fn latest_stable_link(config: &BannerConfig, stable: &str) -> Element {
    Element::new("a")
        .with_attribute("href", config.version_link(stable))
        .with_child(Node::text(format!(
            "Go to the latest stable version ({}).",
            stable
        )))
}
