//! Fortune Palette - color palettes from service concepts, day pillar readings
//!
//! This binary exposes the color engine and the fortune computation as
//! scriptable subcommands with human-readable and JSON output.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fortune_palette::cli::{
    ClassifyArgs, CliResult, ConfigArgs, FortuneArgs, HarmonyArgs, NameArgs, PaletteArgs,
    ShadesArgs,
};
use fortune_palette::constants::APP_BINARY_NAME;

/// Fortune Palette - color palettes from service concepts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = APP_BINARY_NAME)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick the primary color for a service concept
    Classify(ClassifyArgs),
    /// Show the 50-900 shade ramp of a color
    Shades(ShadesArgs),
    /// Show the harmonic secondary colors of a color
    Harmony(HarmonyArgs),
    /// Build the full palette for a concept
    Palette(PaletteArgs),
    /// Name the reference color closest to a color
    Name(NameArgs),
    /// Compute a day pillar reading for a birth date
    Fortune(FortuneArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Classify(args) => args.execute(),
            Self::Shades(args) => args.execute(),
            Self::Harmony(args) => args.execute(),
            Self::Palette(args) => args.execute(),
            Self::Name(args) => args.execute(),
            Self::Fortune(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
