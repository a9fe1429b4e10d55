//! Extension command: print a single extension directive.

use crate::cli::common::CliResult;
use crate::extensions::{encode_presser_mode, encode_speed_number, encode_stitch_number};
use clap::{Args, Subcommand};

/// Print a knitout extension directive
#[derive(Args, Debug)]
pub struct ExtArgs {
    #[command(subcommand)]
    command: ExtCommand,
}

#[derive(Subcommand, Debug)]
enum ExtCommand {
    /// x-stitch-number (any integer)
    Stitch {
        /// Stitch number
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// x-speed-number (0-15)
    Speed {
        /// Speed number
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// x-presser-mode (off, auto, on)
    Presser {
        /// Presser mode
        value: String,
    },
}

impl ExtArgs {
    /// Execute the ext subcommand
    pub fn execute(&self) -> CliResult<()> {
        let line = match &self.command {
            ExtCommand::Stitch { value } => encode_stitch_number(*value),
            ExtCommand::Speed { value } => encode_speed_number(*value)?,
            ExtCommand::Presser { value } => encode_presser_mode(value)?,
        };
        println!("{line}");
        Ok(())
    }
}
