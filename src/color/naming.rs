//! Nearest named color lookup.

use crate::models::RgbColor;

/// Reference colors used to title a shade ramp.
pub const NAMED_COLORS: [(RgbColor, &str); 20] = [
    (RgbColor::new(0xFF, 0x00, 0x00), "Red"),
    (RgbColor::new(0x00, 0xFF, 0x00), "Green"),
    (RgbColor::new(0x00, 0x00, 0xFF), "Blue"),
    (RgbColor::new(0xFF, 0xFF, 0x00), "Yellow"),
    (RgbColor::new(0xFF, 0x00, 0xFF), "Magenta"),
    (RgbColor::new(0x00, 0xFF, 0xFF), "Cyan"),
    (RgbColor::new(0xFF, 0xA5, 0x00), "Orange"),
    (RgbColor::new(0x80, 0x00, 0x80), "Purple"),
    (RgbColor::new(0x00, 0x80, 0x00), "Forest"),
    (RgbColor::new(0x00, 0x00, 0x80), "Navy"),
    (RgbColor::new(0xFF, 0xC0, 0xCB), "Pink"),
    (RgbColor::new(0xA5, 0x2A, 0x2A), "Brown"),
    (RgbColor::new(0x80, 0x80, 0x80), "Gray"),
    (RgbColor::new(0xFF, 0xD7, 0x00), "Gold"),
    (RgbColor::new(0x4B, 0x00, 0x82), "Indigo"),
    (RgbColor::new(0x40, 0xE0, 0xD0), "Turquoise"),
    (RgbColor::new(0x8B, 0x45, 0x13), "Saddle"),
    (RgbColor::new(0x46, 0x82, 0xB4), "Steel"),
    (RgbColor::new(0x93, 0x70, 0xDB), "Medium Purple"),
    (RgbColor::new(0x3C, 0xB3, 0x71), "Sea Green"),
];

/// Returns the name of the reference color closest to `color`.
///
/// Distance is Euclidean in RGB space; on a tie the earlier entry wins.
///
/// # Examples
///
/// ```
/// use fortune_palette::color::color_name;
/// use fortune_palette::models::RgbColor;
///
/// assert_eq!(color_name(RgbColor::new(0x21, 0x96, 0xF3)), "Steel");
/// ```
pub fn color_name(color: RgbColor) -> &'static str {
    NAMED_COLORS
        .iter()
        .min_by_key(|(reference, _)| color.distance_squared(reference))
        .map_or("Gray", |&(_, name)| name)
}
