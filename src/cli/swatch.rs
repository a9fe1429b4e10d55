//! Swatch command: a complete cast-on and plain knit program.

use crate::cli::common::{emit, load_config, CliResult};
use crate::cli::header::HeaderOptions;
use crate::models::Direction;
use crate::writer::KnitoutWriter;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Generate a plain swatch
///
/// Brings the carrier in on the yarn inserting hook, casts on with an
/// alternating tuck/miss sweep in both directions, releases the hook, knits
/// `height` back-and-forth rows and takes the carrier out.
#[derive(Debug, Clone, Args)]
pub struct SwatchArgs {
    /// Width in needles
    #[arg(long, value_name = "NEEDLES")]
    pub width: u32,

    /// Number of back-and-forth row pairs
    #[arg(long, value_name = "ROWS")]
    pub height: u32,

    /// Carrier to knit with
    #[arg(long, value_name = "CARRIER")]
    pub carrier: String,

    /// Fabric presser mode (off, auto, on)
    #[arg(long, value_name = "MODE")]
    pub presser: Option<String>,

    /// Speed number (0-15)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub speed: Option<i64>,

    /// Stitch number
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub stitch: Option<i64>,

    /// Header settings
    #[command(flatten)]
    pub header: HeaderOptions,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SwatchArgs {
    /// Execute the swatch command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        let header = self.header.build_header(&config)?;
        let writer = self.build(KnitoutWriter::with_header(header))?;

        info!(
            width = self.width,
            height = self.height,
            lines = writer.instructions().len(),
            "generated swatch"
        );

        emit(&writer.compile(), self.output.as_deref())
    }

    /// Appends the swatch program to `writer`.
    pub fn build(&self, mut writer: KnitoutWriter) -> CliResult<KnitoutWriter> {
        let carrier = self.carrier.as_str();

        if let Some(mode) = &self.presser {
            writer.fabric_presser(mode)?;
        }
        if let Some(speed) = self.speed {
            writer.speed(speed)?;
        }
        if let Some(stitch) = self.stitch {
            writer.stitch(stitch);
        }

        writer.inhook(carrier);
        writer.tuck_miss_sweep(self.width, Direction::Backward, carrier);
        writer.tuck_miss_sweep(self.width, Direction::Forward, carrier);
        writer.releasehook(carrier);

        for _ in 0..self.height {
            writer.knit_row(self.width, Direction::Backward, carrier);
            writer.knit_row(self.width, Direction::Forward, carrier);
        }

        writer.outhook(carrier);
        Ok(writer)
    }
}
