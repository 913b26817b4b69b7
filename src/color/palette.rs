//! Full palette for a concept: primary, ramps, secondaries and descriptions.

use serde::Serialize;
use tracing::debug;

use super::classifier::{classify_concept, concept_description, ConceptMatch};
use super::harmony::PaletteResult;
use super::shades::shade_ramp;
use crate::models::{Harmony, PaletteColor, RgbColor};

/// A secondary color with its explanation and ramp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecondaryPalette {
    /// Relationship to the primary
    pub harmony: Harmony,
    /// Display label such as "보조1"
    pub label: &'static str,
    /// What the relationship conveys
    pub description: &'static str,
    /// Ramp of the secondary color
    pub ramp: PaletteColor,
}

/// Everything derived from one concept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptPalette {
    /// The concept as given
    pub concept: String,
    /// Classifier outcome
    #[serde(rename = "match")]
    pub matched: ConceptMatch,
    /// Advisory sentence for the primary color
    pub description: &'static str,
    /// Ramp of the primary color
    pub primary: PaletteColor,
    /// Complementary, triadic A, triadic B and analogous
    pub secondaries: Vec<SecondaryPalette>,
}

impl ConceptPalette {
    /// The primary color.
    #[must_use]
    pub const fn primary_color(&self) -> RgbColor {
        self.matched.color
    }
}

/// Builds the palette for a concept.
///
/// # Examples
///
/// ```
/// use fortune_palette::color::build_palette;
///
/// let palette = build_palette("친환경 브랜드");
/// assert_eq!(palette.secondaries.len(), 4);
/// assert_eq!(palette.primary.shades.len(), 10);
/// ```
pub fn build_palette(concept: &str) -> ConceptPalette {
    let matched = classify_concept(concept);
    let result = PaletteResult::from_primary(matched.color);

    let secondaries = result
        .secondaries
        .iter()
        .map(|secondary| SecondaryPalette {
            harmony: secondary.harmony,
            label: secondary.harmony.display_name(),
            description: secondary.harmony.description(),
            ramp: shade_ramp(secondary.color),
        })
        .collect();

    debug!(concept, primary = %matched.color, "built palette");

    ConceptPalette {
        concept: concept.to_string(),
        matched,
        description: concept_description(concept),
        primary: shade_ramp(matched.color),
        secondaries,
    }
}
