//! Data models for colors, shade ramps, concept categories and harmonies.
//!
//! This module contains the value types shared by the color engine, the CLI
//! and the web API. Models are independent of any output surface.

pub mod category;
pub mod color_palette;
pub mod harmony;
pub mod rgb;

// Re-export all model types
pub use category::{ConceptCategory, FALLBACK_COLOR};
pub use color_palette::{PaletteColor, Shade, ShadeLevel, ShadeMix, SHADE_50};
pub use harmony::Harmony;
pub use rgb::{Hsl, RgbColor};
