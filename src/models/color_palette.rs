//! Shade ramp data structures.
//!
//! A ramp expands one base color into ten levels in the style of the
//! Tailwind CSS palette: level 600 is the base, 100-500 are tints toward
//! white, 700-900 are shades toward black, and 50 is a fixed near-white.

use serde::Serialize;

use super::RgbColor;

/// Fixed near-white used for level 50 regardless of the base color.
pub const SHADE_50: RgbColor = RgbColor::new(0xf5, 0xfa, 0xff);

/// One of the ten levels of a shade ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ShadeLevel {
    /// Fixed near-white
    L50,
    /// 90% toward white
    L100,
    /// 70% toward white
    L200,
    /// 50% toward white
    L300,
    /// 30% toward white
    L400,
    /// 15% toward white
    L500,
    /// The base color
    L600,
    /// 15% toward black
    L700,
    /// 30% toward black
    L800,
    /// 50% toward black
    L900,
}

/// How a level is derived from the base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadeMix {
    /// A constant independent of the base
    Fixed(RgbColor),
    /// Mix toward white by this fraction
    Tint(f64),
    /// The base color unchanged
    Base,
    /// Mix toward black by this fraction
    Shade(f64),
}

impl ShadeLevel {
    /// All levels, lightest first.
    pub const ALL: [Self; 10] = [
        Self::L50,
        Self::L100,
        Self::L200,
        Self::L300,
        Self::L400,
        Self::L500,
        Self::L600,
        Self::L700,
        Self::L800,
        Self::L900,
    ];

    /// Numeric level (50, 100, ... 900).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::L50 => 50,
            Self::L100 => 100,
            Self::L200 => 200,
            Self::L300 => 300,
            Self::L400 => 400,
            Self::L500 => 500,
            Self::L600 => 600,
            Self::L700 => 700,
            Self::L800 => 800,
            Self::L900 => 900,
        }
    }

    /// Looks a level up by its numeric value.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }

    /// The mix rule for this level.
    #[must_use]
    pub const fn mix(self) -> ShadeMix {
        match self {
            Self::L50 => ShadeMix::Fixed(SHADE_50),
            Self::L100 => ShadeMix::Tint(0.9),
            Self::L200 => ShadeMix::Tint(0.7),
            Self::L300 => ShadeMix::Tint(0.5),
            Self::L400 => ShadeMix::Tint(0.3),
            Self::L500 => ShadeMix::Tint(0.15),
            Self::L600 => ShadeMix::Base,
            Self::L700 => ShadeMix::Shade(0.15),
            Self::L800 => ShadeMix::Shade(0.3),
            Self::L900 => ShadeMix::Shade(0.5),
        }
    }

    /// Applies this level's mix rule to `base`.
    #[must_use]
    pub fn apply(self, base: RgbColor) -> RgbColor {
        match self.mix() {
            ShadeMix::Fixed(color) => color,
            ShadeMix::Tint(fraction) => base.mix(RgbColor::new(255, 255, 255), fraction),
            ShadeMix::Base => base,
            ShadeMix::Shade(fraction) => base.mix(RgbColor::new(0, 0, 0), fraction),
        }
    }
}

/// A single shade of a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shade {
    /// Shade level (50, 100, ... 900).
    pub level: u16,
    /// Hex color code (e.g., "#2196f3").
    pub hex: String,
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Shade {
    /// Builds the shade of `base` at `level`.
    #[must_use]
    pub fn of(base: RgbColor, level: ShadeLevel) -> Self {
        let color = level.apply(base);
        Self {
            level: level.value(),
            hex: color.to_hex(),
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }

    /// Convert this shade to an RgbColor.
    #[must_use]
    pub const fn to_rgb(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }
}

/// A single base color with its full shade ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    /// Display name of the color (e.g., "Blue", "Steel").
    pub name: String,
    /// Base color as lowercase hex.
    pub base: String,
    /// Shades from light (50) to dark (900).
    pub shades: Vec<Shade>,
}

impl PaletteColor {
    /// Builds the ten-level ramp for `base`.
    #[must_use]
    pub fn from_base(name: impl Into<String>, base: RgbColor) -> Self {
        Self {
            name: name.into(),
            base: base.to_hex(),
            shades: ShadeLevel::ALL
                .into_iter()
                .map(|level| Shade::of(base, level))
                .collect(),
        }
    }

    /// Get the "primary" shade (600 level, the unmodified base).
    #[must_use]
    pub fn primary_shade(&self) -> Option<&Shade> {
        self.shade(ShadeLevel::L600)
    }

    /// Get a shade by level.
    #[must_use]
    pub fn shade(&self, level: ShadeLevel) -> Option<&Shade> {
        self.shades.iter().find(|s| s.level == level.value())
    }

    /// Get a shade by index (0-9).
    #[must_use]
    pub fn shade_at(&self, index: usize) -> Option<&Shade> {
        self.shades.get(index)
    }

    /// Get the number of shades.
    #[must_use]
    pub fn shade_count(&self) -> usize {
        self.shades.len()
    }

    /// The shade hex codes in level order.
    #[must_use]
    pub fn hex_codes(&self) -> Vec<String> {
        self.shades.iter().map(|s| s.hex.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        let values: Vec<u16> = ShadeLevel::ALL.iter().map(|l| l.value()).collect();
        assert_eq!(values, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(ShadeLevel::from_value(600), Some(ShadeLevel::L600));
        assert_eq!(ShadeLevel::from_value(50), Some(ShadeLevel::L50));
        assert_eq!(ShadeLevel::from_value(550), None);
    }

    #[test]
    fn test_mix_table() {
        assert_eq!(ShadeLevel::L100.mix(), ShadeMix::Tint(0.9));
        assert_eq!(ShadeLevel::L500.mix(), ShadeMix::Tint(0.15));
        assert_eq!(ShadeLevel::L600.mix(), ShadeMix::Base);
        assert_eq!(ShadeLevel::L700.mix(), ShadeMix::Shade(0.15));
        assert_eq!(ShadeLevel::L900.mix(), ShadeMix::Shade(0.5));
    }

    #[test]
    fn test_palette_color_ramp() {
        let base = RgbColor::new(33, 150, 243);
        let color = PaletteColor::from_base("Steel", base);

        assert_eq!(color.shade_count(), 10);
        assert_eq!(color.base, "#2196f3");

        let primary = color.primary_shade().expect("600 should exist");
        assert_eq!(primary.level, 600);
        assert_eq!(primary.to_rgb(), base);

        let lightest = color.shade_at(0).expect("50 should exist");
        assert_eq!(lightest.hex, "#f5faff");

        let s300 = color.shade(ShadeLevel::L300).expect("300 should exist");
        assert_eq!(s300.hex, "#90cbf9");

        let s800 = color.shade(ShadeLevel::L800).expect("800 should exist");
        assert_eq!(s800.hex, "#1769aa");
    }

    #[test]
    fn test_level_50_ignores_base() {
        for base in [RgbColor::new(0, 0, 0), RgbColor::new(255, 0, 0), RgbColor::new(9, 9, 9)] {
            assert_eq!(ShadeLevel::L50.apply(base), SHADE_50);
        }
    }
}
