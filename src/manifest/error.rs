use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch versions.json manifest: {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to read versions.json manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid versions.json manifest: {0}")]
    InvalidManifest(String),
}
