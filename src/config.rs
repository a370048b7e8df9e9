use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Page contract
// =============================================================================

/// File name of the manifest, resolved against the site base URL
pub const MANIFEST_FILE_NAME: &str = "versions.json";

/// Version reported when the build is not running on a branch
pub const DEFAULT_VERSION: &str = "dev";

/// Environment variable carrying the CI ref the docs were built from
pub const GIT_REF_ENV: &str = "GITHUB_REF";

/// Selector of the element the version links are appended to
pub const VERSION_LIST_SELECTOR: &str = ".rst-other-versions dl";

/// Selector of the element holding the banner
pub const VERSION_BANNER_SELECTOR: &str = ".version-banner";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing config value: {0}")]
    Missing(&'static str),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Settings supplied by the embedding page
///
/// Every constructor, deserialization included, goes through validation.
/// Immutable once built.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawBannerConfig")]
pub struct BannerConfig {
    current_version: String,
    base_url: String,
}

/// Config as written by the embedding page, before validation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBannerConfig {
    current_version: String,
    base_url: String,
}

impl TryFrom<RawBannerConfig> for BannerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBannerConfig) -> Result<Self, Self::Error> {
        BannerConfig::new(raw.current_version, raw.base_url)
    }
}

impl BannerConfig {
    pub fn new(
        current_version: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self {
            current_version: current_version.into(),
            base_url: base_url.into(),
        }
        .validated()
    }

    /// Loads a config from a JSON file shaped like `{"currentVersion": .., "baseUrl": ..}`
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        self.current_version = self.current_version.trim().to_string();
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();

        if self.current_version.is_empty() {
            return Err(ConfigError::Missing("currentVersion"));
        }
        if self.base_url.is_empty() {
            return Err(ConfigError::Missing("baseUrl"));
        }
        Ok(self)
    }

    /// Version of the page being viewed, without the leading "v"
    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Root of the documentation site without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Tag used to look the current version up in the manifest
    pub fn current_tag(&self) -> String {
        format!("v{}", self.current_version)
    }

    pub fn version_link(&self, tag: &str) -> String {
        format!("{}/en/{}", self.base_url, tag)
    }

    pub fn manifest_url(&self) -> String {
        format!("{}/{}", self.base_url, MANIFEST_FILE_NAME)
    }
}

/// Derives the docs version from a CI ref.
///
/// - `refs/heads/v1.2.3` -> `1.2.3`
/// - `refs/heads/main` -> `main`
/// - anything else -> [`DEFAULT_VERSION`]
pub fn version_from_git_ref(git_ref: &str) -> String {
    static BRANCH: OnceLock<Regex> = OnceLock::new();
    static RELEASE: OnceLock<Regex> = OnceLock::new();

    let branch = BRANCH.get_or_init(|| Regex::new(r"^refs/heads/(.*)$").unwrap());
    let release = RELEASE.get_or_init(|| Regex::new(r"^v(\d+\.\d+\.\d+)$").unwrap());

    let Some(name) = branch.captures(git_ref).and_then(|c| c.get(1)) else {
        return DEFAULT_VERSION.to_string();
    };

    match release.captures(name.as_str()).and_then(|c| c.get(1)) {
        Some(version) => version.as_str().to_string(),
        None => name.as_str().to_string(),
    }
}

/// Reads the current docs version from `GITHUB_REF`
pub fn current_version_from_env() -> String {
    current_version_with_env(std::env::var(GIT_REF_ENV).ok())
}

fn current_version_with_env(git_ref: Option<String>) -> String {
    git_ref
        .map(|r| version_from_git_ref(&r))
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn new_strips_trailing_slash_from_base_url() {
        let config = BannerConfig::new("1.0", "https://x/").unwrap();

        assert_eq!(config.base_url(), "https://x");
        assert_eq!(config.version_link("v1.0"), "https://x/en/v1.0");
        assert_eq!(config.manifest_url(), "https://x/versions.json");
    }

    #[rstest]
    #[case("", "https://x", "currentVersion")]
    #[case("1.0", "", "baseUrl")]
    #[case("1.0", "/", "baseUrl")]
    fn new_rejects_empty_values(
        #[case] current_version: &str,
        #[case] base_url: &str,
        #[case] field: &str,
    ) {
        let result = BannerConfig::new(current_version, base_url);

        assert!(matches!(result, Err(ConfigError::Missing(f)) if f == field));
    }

    #[test]
    fn current_tag_prepends_v() {
        let config = BannerConfig::new("1.1", "https://x").unwrap();
        assert_eq!(config.current_tag(), "v1.1");
    }

    #[test]
    fn from_json_file_reads_camel_case_keys() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"currentVersion": "0.3.1", "baseUrl": "https://docs.example.org/plato/"}}"#
        )
        .unwrap();

        let config = BannerConfig::from_json_file(file.path()).unwrap();

        assert_eq!(
            config,
            BannerConfig {
                current_version: "0.3.1".to_string(),
                base_url: "https://docs.example.org/plato".to_string(),
            }
        );
    }

    #[test]
    fn deserialize_validates_values() {
        let result = serde_json::from_str::<BannerConfig>(
            r#"{"currentVersion": " ", "baseUrl": "https://x"}"#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("currentVersion"));
    }

    #[test]
    fn from_json_file_rejects_missing_field() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"baseUrl": "https://x"}}"#).unwrap();

        let result = BannerConfig::from_json_file(file.path());

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[rstest]
    #[case("refs/heads/v1.2.3", "1.2.3")]
    #[case("refs/heads/v10.0.12", "10.0.12")]
    #[case("refs/heads/main", "main")]
    #[case("refs/heads/v1.2", "v1.2")]
    // Every dot must be literal
    #[case("refs/heads/v1.2x3", "v1.2x3")]
    #[case("refs/heads/feature/banner", "feature/banner")]
    #[case("refs/tags/v1.2.3", "dev")]
    #[case("", "dev")]
    fn version_from_git_ref_matches_branch_names(#[case] git_ref: &str, #[case] expected: &str) {
        assert_eq!(version_from_git_ref(git_ref), expected);
    }

    #[test]
    fn current_version_with_env_falls_back_to_default() {
        assert_eq!(current_version_with_env(None), DEFAULT_VERSION);
    }

    #[test]
    #[serial]
    fn current_version_from_env_reads_github_ref() {
        // SAFETY: serialized with every other test touching the environment
        unsafe { std::env::set_var(GIT_REF_ENV, "refs/heads/v2.0.0") };
        let version = current_version_from_env();
        unsafe { std::env::remove_var(GIT_REF_ENV) };

        assert_eq!(version, "2.0.0");
    }
}
