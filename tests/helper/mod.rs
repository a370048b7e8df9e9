pub mod logs;
pub mod manifest;

pub use logs::LogCapture;
pub use manifest::{TrackedSource, manifest_json, mock_manifest_server};
