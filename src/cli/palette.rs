//! `palette` command: full palette for a concept.

use clap::Args;
use tracing::debug;

use crate::cli::common::{load_output_config, print_json, CliError, CliResult};
use crate::color::build_palette;
use crate::config::OutputConfig;
use crate::models::PaletteColor;

/// Build the primary color, ramps and harmonic colors for a concept
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Free-text concept, e.g. "친환경 뷰티 브랜드"
    #[arg(value_name = "CONCEPT")]
    pub concept: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the primary color to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let output = load_output_config();
        let palette = build_palette(&self.concept);

        if self.json {
            print_json(&palette, output.pretty_json)?;
        } else {
            let category = palette
                .matched
                .category
                .map_or("(none)", |category| category.key());
            println!("Concept:  {} [{category}]", palette.concept);
            println!("{}", palette.description);
            println!();

            print_ramp("Primary", &palette.primary, &output);
            for secondary in &palette.secondaries {
                println!();
                print_ramp(secondary.label, &secondary.ramp, &output);
                println!("  {}", secondary.description);
            }
        }

        if self.copy {
            let hex = output.format_hex(&palette.primary_color().to_hex());
            copy_to_clipboard(&hex)?;
            // stderr keeps --json output parseable
            eprintln!("Copied {hex} to clipboard");
        }

        Ok(())
    }
}

fn print_ramp(title: &str, ramp: &PaletteColor, output: &OutputConfig) {
    println!("{title}: {} ({})", ramp.name, output.format_hex(&ramp.base));
    let row: Vec<String> = ramp
        .shades
        .iter()
        .map(|s| format!("{}:{}", s.level, output.format_hex(&s.hex)))
        .collect();
    println!("  {}", row.join(" "));
}

fn copy_to_clipboard(text: &str) -> CliResult<()> {
    debug!(text, "copying to clipboard");
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text))
        .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))
}
