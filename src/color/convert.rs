//! String-level color conversions.
//!
//! These helpers never fail loudly: malformed input turns into a sentinel
//! (`None`, a zero [`Hsl`]) that callers treat as "uncomputable".

use tracing::debug;

use crate::models::rgb::hex_color_regex;
use crate::models::{Hsl, RgbColor};

/// Checks whether `input` is a six-digit hex color.
pub fn is_hex_color(input: &str) -> bool {
    hex_color_regex().is_ok_and(|re| re.is_match(input))
}

/// Parses a hex color, returning `None` when it is not exactly six hex digits.
///
/// # Examples
///
/// ```
/// use fortune_palette::color::hex_to_rgb;
/// use fortune_palette::models::RgbColor;
///
/// assert_eq!(hex_to_rgb("#2196F3"), Some(RgbColor::new(33, 150, 243)));
/// assert_eq!(hex_to_rgb("#2196F"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<RgbColor> {
    RgbColor::from_hex(hex).ok()
}

/// Encodes integer channels as lowercase "#rrggbb", clamping each to 0-255.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    RgbColor::from_channels(r, g, b).to_hex()
}

/// Converts a hex color to HSL, or `None` if it does not parse.
pub fn try_hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(|color| color.to_hsl())
}

/// Converts a hex color to HSL.
///
/// Returns `Hsl { h: 0, s: 0, l: 0 }` when the input does not parse.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    try_hex_to_hsl(hex).unwrap_or_else(|| {
        debug!(input = hex, "unparseable hex color, using zero HSL");
        Hsl::default()
    })
}

/// Converts HSL (degrees, percent, percent) to a lowercase hex color.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    RgbColor::from_hsl(Hsl::new(h, s, l)).to_hex()
}
