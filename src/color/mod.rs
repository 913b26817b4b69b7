//! The color derivation engine.
//!
//! Concept text is classified into a primary color, which is expanded into a
//! ten-level shade ramp and four harmonic secondaries. Everything here is
//! pure and synchronous.

pub mod classifier;
pub mod convert;
pub mod harmony;
pub mod naming;
pub mod palette;
pub mod shades;

pub use classifier::{
    classify, classify_concept, concept_description, generate_primary_color_from_concept,
    keyword_score, ConceptMatch,
};
pub use convert::{hex_to_hsl, hex_to_rgb, hsl_to_hex, is_hex_color, rgb_to_hex, try_hex_to_hsl};
pub use harmony::{generate_secondary_colors, secondary_colors, PaletteResult, SecondaryColor};
pub use naming::{color_name, NAMED_COLORS};
pub use palette::{build_palette, ConceptPalette, SecondaryPalette};
pub use shades::{generate_shades, shade_ramp};
