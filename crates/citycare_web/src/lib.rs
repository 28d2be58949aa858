//! Browser-hosted interaction layer for the City Hospital landing page.
//!
//! This crate is a stub by default so the workspace builds and tests on
//! native targets without requiring wasm toolchains. The page logic itself
//! lives in the `citycare` crate.
//!
//! Enable the real bindings with: `--features web` (and a wasm32 target).

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{start, stop_bed_feed};
