//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Fortune Palette";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "fortune-palette";

/// Directory under the platform config directory holding `config.toml`.
pub const APP_DIR_NAME: &str = "FortunePalette";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "FORTUNE_PALETTE_CONFIG_DIR";
