//! In-memory document model standing in for the browser DOM
//!
//! # Modules
//!
//! - [`node`]: Elements, text nodes and HTML serialization
//! - [`page`]: The Read the Docs page layout holding both render targets
//! - [`load`]: Document load state and the signal rendering waits on

pub mod load;
pub mod node;
pub mod page;

pub use load::{LoadSignal, LoadState};
pub use node::{Element, Node};
pub use page::Page;

/// The two regions the banner logic writes to
pub trait Document {
    /// Element matching `.rst-other-versions dl`
    fn version_list(&mut self) -> Option<&mut Element>;

    /// Element matching `.version-banner`
    fn version_banner(&mut self) -> Option<&mut Element>;
}
