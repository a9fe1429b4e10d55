//! CLI command handlers.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method that
//! returns a [`CliResult`].

pub mod common;
pub mod config;
pub mod ext;
pub mod header;
pub mod swatch;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use ext::ExtArgs;
pub use header::{HeaderArgs, HeaderOptions};
pub use swatch::SwatchArgs;
