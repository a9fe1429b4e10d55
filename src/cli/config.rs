//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::models::StartPosition;
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
    /// Machine model name
    #[arg(long, value_name = "NAME")]
    machine: Option<String>,

    /// Machine gauge in needles per inch
    #[arg(long, value_name = "GAUGE")]
    gauge: Option<String>,

    /// Carriers in front-to-back order, space separated
    #[arg(long, value_name = "LIST")]
    carriers: Option<String>,

    /// Start position (right, left, center, keep)
    #[arg(long, value_name = "POSITION")]
    position: Option<String>,

    /// Knitout version for the magic line
    #[arg(long = "knitout-version", value_name = "VERSION")]
    knitout_version: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

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
        if self.machine.is_none()
            && self.gauge.is_none()
            && self.carriers.is_none()
            && self.position.is_none()
            && self.knitout_version.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --machine, --gauge, --carriers, --position, or --knitout-version",
            ));
        }

        let mut config = load_config()?;

        if let Some(machine) = &self.machine {
            config.machine.name = Some(machine.clone());
        }
        if let Some(gauge) = &self.gauge {
            config.machine.gauge = Some(gauge.clone());
        }
        if let Some(carriers) = &self.carriers {
            config.output.carriers = carriers.split_whitespace().map(str::to_string).collect();
        }
        if let Some(position) = &self.position {
            let position: StartPosition = position.parse()?;
            config.output.position = position.to_string();
        }
        if let Some(version) = &self.knitout_version {
            if version.trim().is_empty() {
                return Err(CliError::validation("Knitout version must not be empty"));
            }
            config.output.version.clone_from(version);
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn output_human_readable(config: &Config) {
    let path = Config::config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());

    println!("Configuration ({path})");
    println!();
    println!("Machine:");
    println!(
        "  Name:     {}",
        config.machine.name.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  Gauge:    {}",
        config.machine.gauge.as_deref().unwrap_or("(not set)")
    );
    println!();
    println!("Output:");
    println!("  Version:  {}", config.output.version);
    println!("  Position: {}", config.output.position);
    if config.output.carriers.is_empty() {
        println!("  Carriers: (none)");
    } else {
        println!("  Carriers: {}", config.output.carriers.join(" "));
    }
}
