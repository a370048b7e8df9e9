//! Classification of the viewed documentation version

use std::fmt;

use crate::manifest::VersionManifest;

/// Status of the version being viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// Viewed version is the stable release
    Current,
    /// Viewed version is a release other than the stable one
    Outdated,
    /// Viewed version is not a release
    Development,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Current => "current",
            PageStatus::Outdated => "outdated",
            PageStatus::Development => "development",
        }
    }

    /// Marker class added to the banner, if any
    pub fn banner_class(&self) -> Option<&'static str> {
        match self {
            PageStatus::Current => None,
            PageStatus::Outdated => Some("outdated"),
            PageStatus::Development => Some("dev"),
        }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `current_version` (without the leading "v") against the manifest
///
/// Released membership is checked first, so a tag listed in both `dev` and
/// `released` counts as a release.
pub fn classify(current_version: &str, manifest: &VersionManifest) -> PageStatus {
    let tag = format!("v{}", current_version);

    if !manifest.is_released(&tag) {
        PageStatus::Development
    } else if !manifest.is_stable(&tag) {
        PageStatus::Outdated
    } else {
        PageStatus::Current
    }
}
