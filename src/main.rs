//! knitout - generate knitout knitting-machine instructions
//!
//! Headless front end for the library: headers, swatches, extension
//! directives and the configuration file.

use clap::{Parser, Subcommand};
use knitout::cli::{self, CliResult};
use knitout::constants::APP_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// knitout - generate knitout knitting-machine instructions
#[derive(Parser, Debug)]
#[command(name = APP_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a knitout header
    Header(cli::HeaderArgs),
    /// Generate a plain swatch
    Swatch(cli::SwatchArgs),
    /// Print an extension directive
    Ext(cli::ExtArgs),
    /// Manage configuration
    Config(cli::ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Header(args) => args.execute(),
            Self::Swatch(args) => args.execute(),
            Self::Ext(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
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

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().into());
    }
}
