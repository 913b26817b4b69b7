//! `fortune` command: day pillar reading for a birth date.

use clap::Args;

use crate::cli::common::{load_output_config, print_json, CliError, CliResult};
use crate::fortune::{parse_birth_date, parse_birth_time, Compatibility, FortuneReading};

/// Compute the day pillar, element and character of a birth date
#[derive(Debug, Clone, Args)]
pub struct FortuneArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Birth time (HH:MM); does not change the day pillar
    #[arg(long, value_name = "TIME")]
    pub time: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl FortuneArgs {
    /// Execute the fortune command
    pub fn execute(&self) -> CliResult<()> {
        let birth_date =
            parse_birth_date(&self.date).map_err(|e| CliError::validation(format!("{e:#}")))?;
        let birth_time = self
            .time
            .as_deref()
            .map(parse_birth_time)
            .transpose()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let output = load_output_config();
        let reading = FortuneReading::for_birth(birth_date, birth_time);

        if self.json {
            return print_json(&reading, output.pretty_json);
        }

        println!("Birth date:  {}", reading.birth_date);
        if let Some(time) = reading.birth_time {
            println!("Birth time:  {}", time.format("%H:%M"));
        }
        println!("Day pillar:  {}일주", reading.day_pillar);
        println!(
            "Element:     {} ({})",
            reading.element_label,
            output.format_hex(reading.element_color)
        );
        println!("Character:   {}", reading.character.name);
        println!();
        print_tier("Best matches", Compatibility::Best);
        print_tier("Good matches", Compatibility::Good);
        print_tier("Worst matches", Compatibility::Worst);

        Ok(())
    }
}

fn print_tier(title: &str, tier: Compatibility) {
    println!("{title:<14} {}", tier.pillars().join(", "));
}
