//! `name` command: nearest reference color name.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_output_config, print_json, CliResult};
use crate::cli::shades::parse_color_arg;
use crate::color::color_name;

/// Name the reference color closest to a color
#[derive(Debug, Clone, Args)]
pub struct NameArgs {
    /// Color (#RRGGBB)
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct NameResponse {
    hex: String,
    name: &'static str,
}

impl NameArgs {
    /// Execute the name command
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color_arg(&self.hex)?;
        let output = load_output_config();

        let response = NameResponse {
            hex: output.format_hex(&color.to_hex()),
            name: color_name(color),
        };

        if self.json {
            print_json(&response, output.pretty_json)
        } else {
            println!("{}", response.name);
            Ok(())
        }
    }
}
