//! RGB color handling with hex parsing, HSL conversion and channel mixing.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Pattern accepted for hex colors: six hex digits after an optional `#`.
pub const HEX_COLOR_PATTERN: &str = r"^#?[0-9A-Fa-f]{6}$";

static HEX_COLOR_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).ok());

/// Returns the compiled [`HEX_COLOR_PATTERN`].
///
/// # Errors
///
/// Returns an error if the pattern failed to compile.
pub fn hex_color_regex() -> Result<&'static Regex> {
    HEX_COLOR_REGEX
        .as_ref()
        .context("Failed to create hex color regex")
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// A color in HSL space.
///
/// Hue is in degrees, saturation and lightness are percentages (0-100).
/// Only used as an intermediate when rotating hues.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)` for colors produced by [`RgbColor::to_hsl`]
    pub h: f64,
    /// Saturation percentage (0-100)
    pub s: f64,
    /// Lightness percentage (0-100)
    pub l: f64,
}

impl Hsl {
    /// Creates a new HSL value.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Returns this color with the hue rotated by `degrees`, wrapped into `[0, 360)`.
    ///
    /// Saturation and lightness are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use fortune_palette::models::Hsl;
    ///
    /// let rotated = Hsl::new(350.0, 80.0, 40.0).rotate_hue(180.0);
    /// assert!((rotated.h - 170.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees) % 360.0,
            s: self.s,
            l: self.l,
        }
    }
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an `RgbColor` from unbounded integer channels.
    ///
    /// Each channel is clamped to 0-255 independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use fortune_palette::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_channels(-20, 128, 300), RgbColor::new(0, 128, 255));
    /// ```
    #[must_use]
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb".
    /// Surrounding whitespace and the short "#RGB" form are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use fortune_palette::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly six hex digits after an optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        // Checked up front so the byte slicing below stays on char boundaries
        if !hex_color_regex()?.is_match(hex) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use fortune_palette::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex_upper(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL.
    ///
    /// Achromatic colors (all channels equal) have hue and saturation 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use fortune_palette::models::RgbColor;
    ///
    /// let hsl = RgbColor::new(255, 0, 0).to_hsl();
    /// assert!((hsl.h - 0.0).abs() < 0.01);
    /// assert!((hsl.s - 100.0).abs() < 0.01);
    /// assert!((hsl.l - 50.0).abs() < 0.01);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;

        Hsl::new(h * 360.0, s * 100.0, l * 100.0)
    }

    /// Creates an `RgbColor` from HSL.
    ///
    /// Uses the chroma / intermediate / match decomposition over six 60° sectors.
    /// A hue outside `[0, 360)` falls in no sector and yields the gray at the
    /// match lightness.
    ///
    /// # Examples
    ///
    /// ```
    /// use fortune_palette::models::{Hsl, RgbColor};
    ///
    /// assert_eq!(RgbColor::from_hsl(Hsl::new(120.0, 100.0, 50.0)), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h;
        let s = hsl.s / 100.0;
        let l = hsl.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if (0.0..60.0).contains(&h) {
            (c, x, 0.0)
        } else if (60.0..120.0).contains(&h) {
            (x, c, 0.0)
        } else if (120.0..180.0).contains(&h) {
            (0.0, c, x)
        } else if (180.0..240.0).contains(&h) {
            (0.0, x, c)
        } else if (240.0..300.0).contains(&h) {
            (x, 0.0, c)
        } else if (300.0..360.0).contains(&h) {
            (c, 0.0, x)
        } else {
            (0.0, 0.0, 0.0)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Mixes this color toward `target`.
    ///
    /// `fraction` 0.0 keeps `self`, 1.0 returns `target`. Each channel is
    /// `round(a + (b - a) * fraction)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fortune_palette::models::RgbColor;
    ///
    /// let gray = RgbColor::new(0, 0, 0).mix(RgbColor::new(255, 255, 255), 0.5);
    /// assert_eq!(gray, RgbColor::new(128, 128, 128));
    /// ```
    #[must_use]
    pub fn mix(&self, target: Self, fraction: f64) -> Self {
        let channel = |a: u8, b: u8| {
            let a = f64::from(a);
            (a + (f64::from(b) - a) * fraction).round() as i32
        };

        Self::from_channels(
            channel(self.r, target.r),
            channel(self.g, target.g),
            channel(self.b, target.b),
        )
    }

    /// Squared Euclidean distance between two colors in RGB space.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Serializes an `RgbColor` as its lowercase hex string.
///
/// For use with `#[serde(serialize_with = "...")]` on API response fields.
pub fn serialize_as_hex<S>(color: &RgbColor, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&color.to_hex())
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
