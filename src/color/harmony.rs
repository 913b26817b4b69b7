//! Harmonic secondary colors.
//!
//! Each secondary keeps the primary's saturation and lightness and rotates
//! its hue by a fixed angle.

use serde::Serialize;

use super::convert::{hex_to_hsl, hsl_to_hex};
use crate::models::{Harmony, RgbColor};

/// Secondary color tagged with the relationship that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecondaryColor {
    /// Relationship to the primary
    pub harmony: Harmony,
    /// Resulting color
    #[serde(serialize_with = "crate::models::rgb::serialize_as_hex")]
    pub color: RgbColor,
}

/// A primary color with its four secondaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteResult {
    /// The primary color
    #[serde(serialize_with = "crate::models::rgb::serialize_as_hex")]
    pub primary: RgbColor,
    /// Complementary, triadic A, triadic B and analogous, in that order
    pub secondaries: [SecondaryColor; 4],
}

impl PaletteResult {
    /// Derives the four secondaries of `primary`.
    #[must_use]
    pub fn from_primary(primary: RgbColor) -> Self {
        let hsl = primary.to_hsl();
        let secondaries = Harmony::ALL.map(|harmony| SecondaryColor {
            harmony,
            color: RgbColor::from_hsl(hsl.rotate_hue(harmony.offset())),
        });

        Self {
            primary,
            secondaries,
        }
    }

    /// Secondary colors without their tags.
    #[must_use]
    pub fn secondary_colors(&self) -> [RgbColor; 4] {
        self.secondaries.map(|s| s.color)
    }
}

/// Returns the four secondaries of `primary`.
pub fn secondary_colors(primary: RgbColor) -> [RgbColor; 4] {
    PaletteResult::from_primary(primary).secondary_colors()
}

/// Generates the four secondary colors of a hex color as lowercase hex.
///
/// Unparseable input goes through the zero HSL and yields four blacks.
///
/// # Examples
///
/// ```
/// use fortune_palette::color::generate_secondary_colors;
///
/// assert_eq!(
///     generate_secondary_colors("#ff0000"),
///     ["#00ffff", "#00ff00", "#0000ff", "#ffff00"]
/// );
/// ```
pub fn generate_secondary_colors(hex: &str) -> [String; 4] {
    let hsl = hex_to_hsl(hex);
    Harmony::ALL.map(|harmony| {
        let rotated = hsl.rotate_hue(harmony.offset());
        hsl_to_hex(rotated.h, rotated.s, rotated.l)
    })
}
