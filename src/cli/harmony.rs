//! `harmony` command: four secondary colors of a primary.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_output_config, print_json, CliResult};
use crate::cli::shades::parse_color_arg;
use crate::color::PaletteResult;
use crate::models::Harmony;

/// Show the complementary, triadic and analogous colors of a color
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Primary color (#RRGGBB)
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct HarmonyItem {
    harmony: Harmony,
    label: &'static str,
    color: String,
}

#[derive(Debug, Serialize)]
struct HarmonyResponse {
    primary: String,
    secondaries: Vec<HarmonyItem>,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let primary = parse_color_arg(&self.hex)?;
        let output = load_output_config();
        let result = PaletteResult::from_primary(primary);

        let response = HarmonyResponse {
            primary: output.format_hex(&result.primary.to_hex()),
            secondaries: result
                .secondaries
                .iter()
                .map(|s| HarmonyItem {
                    harmony: s.harmony,
                    label: s.harmony.display_name(),
                    color: output.format_hex(&s.color.to_hex()),
                })
                .collect(),
        };

        if self.json {
            return print_json(&response, output.pretty_json);
        }

        println!("Primary: {}", response.primary);
        for item in &response.secondaries {
            println!("  {:<14} {}  {}", item.harmony.label(), item.color, item.label);
        }

        Ok(())
    }
}
