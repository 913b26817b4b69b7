//! Fortune Palette Library
//!
//! This library derives UI color palettes from free-text service concepts
//! (primary color, shade ramps, harmonic secondaries) and computes day pillar
//! fortune readings from birth dates. The `web` feature adds a JSON API.

// Module declarations
pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod fortune;
pub mod models;
#[cfg(feature = "web")]
pub mod web;
