//! popmap-rs
//!
//! Umbrella crate re-exporting [`popmap_core`] so the demos under `demos/`
//! can be run from the workspace root (`cargo run --example basic_usage`).
pub use popmap_core::*;
