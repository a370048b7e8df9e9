//! Version banner and version switcher rendering
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Loader    │────▶│  Renderer   │
//! │ (manifest)  │     │ (wait load) │     │ (mutate doc)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │ Classifier  │
//!                                         │ (status)    │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`classify`]: Decides whether the viewed version is current, outdated or development
//! - [`render`]: Writes the version list and the banner into a document
//! - [`loader`]: Fetches the manifest and renders once the document has loaded
//! - [`error`]: Error type for rendering

pub mod classify;
pub mod error;
pub mod loader;
pub mod render;

pub use classify::{PageStatus, classify};
pub use error::RenderError;
pub use loader::{LoadOutcome, load_and_render};
pub use render::render;
