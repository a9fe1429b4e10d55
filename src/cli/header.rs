//! Header command: print or write a knitout comment header.

use crate::cli::common::{emit, load_config, parse_key_value, CliError, CliResult};
use crate::config::Config;
use crate::models::Header;
use clap::Args;
use std::path::PathBuf;

/// Header settings shared by commands that produce a header.
///
/// Flags left unset fall back to the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct HeaderOptions {
    /// Machine model name
    #[arg(long, value_name = "NAME")]
    pub machine: Option<String>,

    /// Machine gauge in needles per inch
    #[arg(long, value_name = "GAUGE")]
    pub gauge: Option<String>,

    /// Carriers in front-to-back order, space separated (e.g. "1 2 3")
    #[arg(long, value_name = "LIST")]
    pub carriers: Option<String>,

    /// Yarn loaded in a carrier, as CARRIER=NAME (repeatable)
    #[arg(long = "yarn", value_name = "CARRIER=NAME")]
    pub yarns: Vec<String>,

    /// Start position, written as given
    #[arg(long, value_name = "POSITION")]
    pub position: Option<String>,

    /// Knitout version for the magic line
    #[arg(long = "knitout-version", value_name = "VERSION")]
    pub knitout_version: Option<String>,

    /// Extra header comment, as KEY=VALUE (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,
}

impl HeaderOptions {
    /// Builds a header from the configuration overlaid with these flags.
    pub fn build_header(&self, config: &Config) -> CliResult<Header> {
        let mut header = config
            .header()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;

        if let Some(version) = &self.knitout_version {
            header.set_version(version.clone());
        }
        if let Some(machine) = &self.machine {
            header.set_machine(machine.clone());
        }
        if let Some(gauge) = &self.gauge {
            header.set_gauge(gauge);
        }
        if let Some(carriers) = &self.carriers {
            header.set_carriers_str(carriers);
        }
        for yarn in &self.yarns {
            let (carrier, name) = parse_key_value(yarn)?;
            header.set_yarn(carrier, name);
        }
        if let Some(position) = &self.position {
            header.set_position(position.clone());
        }
        for field in &self.fields {
            let (key, value) = parse_key_value(field)?;
            header.add_field(key, value);
        }

        Ok(header)
    }
}

/// Print a knitout header
#[derive(Debug, Clone, Args)]
pub struct HeaderArgs {
    /// Header settings
    #[command(flatten)]
    pub header: HeaderOptions,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl HeaderArgs {
    /// Execute the header command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let header = self.header.build_header(&config)?;
        emit(&header.render(), self.output.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::new();
        config.machine.name = Some("FROM-CONFIG".to_string());
        config.machine.gauge = Some("12".to_string());

        let options = HeaderOptions {
            machine: Some("SWG091N2".to_string()),
            carriers: Some("0 1 2 3".to_string()),
            yarns: vec!["1=50-50 Rust".to_string()],
            position: Some("Right".to_string()),
            knitout_version: Some("2.0".to_string()),
            ..HeaderOptions::default()
        };

        let header = options.build_header(&config).unwrap();
        assert_eq!(
            header.render(),
            ";!knitout-2.0\n;;Machine: SWG091N2\n;;Gauge: 12\n;;Yarn-1: 50-50 Rust\n\
             ;;Carriers: 0 1 2 3\n;;Position: Right\n\n"
        );
    }

    #[test]
    fn test_bad_yarn_flag_is_rejected() {
        let options = HeaderOptions {
            yarns: vec!["50-50 Rust".to_string()],
            ..HeaderOptions::default()
        };
        assert!(options.build_header(&Config::new()).is_err());
    }
}
