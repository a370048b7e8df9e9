//! Version banner and version switcher for versioned documentation sites
//!
//! Fetches a `versions.json` manifest, decides whether the viewed docs are the
//! stable release, an older release or a development build, and writes the
//! version list and a banner into the page.
//!
//! # Modules
//!
//! - [`banner`]: Classification, rendering and the load-and-render entry point
//! - [`config`]: Page config, constants and CI ref parsing
//! - [`document`]: Document model the banner is rendered into
//! - [`logging`]: Subscriber setup for the command-line tool
//! - [`manifest`]: Manifest shape and sources

pub mod banner;
pub mod config;
pub mod document;
pub mod logging;
pub mod manifest;
