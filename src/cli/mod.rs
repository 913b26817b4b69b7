//! CLI command handlers for Fortune Palette.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method returning
//! [`CliResult`]; errors carry the process exit code.

pub mod classify;
pub mod common;
pub mod config;
pub mod fortune;
pub mod harmony;
pub mod name;
pub mod palette;
pub mod shades;

// Re-export types used by main.rs and tests
pub use classify::ClassifyArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use fortune::FortuneArgs;
pub use harmony::HarmonyArgs;
pub use name::NameArgs;
pub use palette::PaletteArgs;
pub use shades::ShadesArgs;
