//! Shade ramp generation.

use tracing::debug;

use super::naming::color_name;
use crate::models::{PaletteColor, RgbColor, ShadeLevel};

/// Builds the ramp for `base`, titled with its nearest color name.
pub fn shade_ramp(base: RgbColor) -> PaletteColor {
    PaletteColor::from_base(color_name(base), base)
}

/// Generates the ten shades of a hex color, lightest (50) first.
///
/// Returns an empty list when `hex` is not a six-digit hex color.
///
/// # Examples
///
/// ```
/// use fortune_palette::color::generate_shades;
///
/// let shades = generate_shades("#2196f3");
/// assert_eq!(shades.len(), 10);
/// assert_eq!(shades[0], "#f5faff");
/// assert_eq!(shades[6], "#2196f3");
/// ```
pub fn generate_shades(hex: &str) -> Vec<String> {
    let Ok(base) = RgbColor::from_hex(hex) else {
        debug!(input = hex, "unparseable base color, no shades");
        return Vec::new();
    };

    ShadeLevel::ALL
        .into_iter()
        .map(|level| level.apply(base).to_hex())
        .collect()
}
