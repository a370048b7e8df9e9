use serde::{Deserialize, Serialize};

/// Contents of `versions.json`
///
/// `dev` and `released` keep manifest order. Nothing is deduplicated or sorted,
/// and `stable` is not checked against `released`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionManifest {
    /// Recommended release tag, absent until a first release exists
    #[serde(default)]
    pub stable: Option<String>,
    /// Pre-release and branch tags
    pub dev: Vec<String>,
    /// Released tags
    pub released: Vec<String>,
}

impl VersionManifest {
    pub fn is_released(&self, tag: &str) -> bool {
        self.released.iter().any(|t| t == tag)
    }

    pub fn is_stable(&self, tag: &str) -> bool {
        self.stable.as_deref() == Some(tag)
    }

    /// All tags in list order: dev tags first, then released tags
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.dev
            .iter()
            .chain(self.released.iter())
            .map(String::as_str)
    }
}
