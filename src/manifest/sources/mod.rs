//! Manifest source implementations

pub mod file;
pub mod http;

pub use file::FileManifestSource;
pub use http::HttpManifestSource;
