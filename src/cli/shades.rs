//! `shades` command: ten-level ramp of a color.

use clap::Args;

use serde::Serialize;

use crate::cli::common::{load_output_config, print_json, CliError, CliResult};
use crate::color::{color_name, shade_ramp};
use crate::models::{RgbColor, Shade, ShadeLevel};

/// Show the 50-900 shade ramp of a color
#[derive(Debug, Clone, Args)]
pub struct ShadesArgs {
    /// Base color (#RRGGBB)
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Show only one level (50, 100, ... 900)
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<u16>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LevelResponse {
    level: u16,
    hex: String,
    name: &'static str,
}

impl ShadesArgs {
    /// Execute the shades command
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_color_arg(&self.hex)?;
        let output = load_output_config();

        if let Some(value) = self.level {
            let level = ShadeLevel::from_value(value).ok_or_else(|| {
                CliError::validation(format!(
                    "Invalid shade level {value}. Expected one of 50, 100, 200, ... 900"
                ))
            })?;
            let shade = Shade::of(base, level);
            let response = LevelResponse {
                level: shade.level,
                hex: output.format_hex(&shade.hex),
                name: color_name(shade.to_rgb()),
            };

            if self.json {
                return print_json(&response, output.pretty_json);
            }
            println!("{}  {}", response.hex, response.name);
            return Ok(());
        }

        let ramp = shade_ramp(base);

        if self.json {
            return print_json(&ramp, output.pretty_json);
        }

        println!("{} ({})", ramp.name, output.format_hex(&ramp.base));
        for shade in &ramp.shades {
            let marker = if shade.level == 600 { "  <- base" } else { "" };
            println!("  {:>3}  {}{marker}", shade.level, output.format_hex(&shade.hex));
        }

        Ok(())
    }
}

/// Parses a color argument, mapping failures to a validation error.
pub(crate) fn parse_color_arg(hex: &str) -> CliResult<RgbColor> {
    RgbColor::from_hex(hex).map_err(|e| CliError::validation(e.to_string()))
}
