//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Print hex codes in uppercase (true or false)
    #[arg(long, value_name = "BOOL")]
    uppercase_hex: Option<bool>,

    /// Indent JSON output (true or false)
    #[arg(long, value_name = "BOOL")]
    pretty_json: Option<bool>,

    /// Web server bind address
    #[arg(long, value_name = "HOST")]
    web_host: Option<String>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    web_port: Option<u16>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().map_err(|e| {
            CliError::validation(format!("Failed to load configuration: {e:#}"))
        })?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.uppercase_hex.is_none()
            && self.pretty_json.is_none()
            && self.web_host.is_none()
            && self.web_port.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --uppercase-hex, --pretty-json, --web-host, or --web-port",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(uppercase) = self.uppercase_hex {
            config.output.uppercase_hex = uppercase;
        }
        if let Some(pretty) = self.pretty_json {
            config.output.pretty_json = pretty;
        }
        if let Some(host) = &self.web_host {
            config.web.host.clone_from(host);
        }
        if let Some(port) = self.web_port {
            config.web.port = port;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Output:");
    println!("  Uppercase Hex: {}", config.output.uppercase_hex);
    println!("  Pretty JSON: {}", config.output.pretty_json);
    println!();

    println!("Web:");
    println!("  Host: {}", config.web.host);
    println!("  Port: {}", config.web.port);
    println!();
}
