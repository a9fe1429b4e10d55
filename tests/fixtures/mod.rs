//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use knitout::config::Config;
use knitout::models::{Header, StartPosition, Yarn, YarnCarrierMap};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the knitout binary
pub fn knitout_bin() -> &'static str {
    env!("CARGO_BIN_EXE_knitout")
}

/// Creates an empty, isolated config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Creates a config directory holding `config`.
pub fn temp_config_with(config: &Config) -> TempDir {
    let dir = temp_config_dir();
    config
        .save_to(&dir.path().join("config.toml"))
        .expect("Failed to write config");
    dir
}

/// Creates a config directory whose config file holds `contents` verbatim.
///
/// Skips [`Config::save_to`] validation, so it can hold rejected settings.
pub fn temp_config_raw(contents: &str) -> TempDir {
    let dir = temp_config_dir();
    std::fs::write(config_file(dir.path()), contents).expect("Failed to write config");
    dir
}

/// A config file with a start position no command accepts.
pub const BAD_POSITION_CONFIG: &str = "[machine]\nname = \"SWGXYZ\"\n\n[output]\nposition = \"middle\"\n";

/// Runs the binary with `args`, pointing it at `config_dir`.
pub fn run_knitout(args: &[&str], config_dir: &Path) -> Output {
    Command::new(knitout_bin())
        .env("KNITOUT_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Path of the config file inside a config directory.
pub fn config_file(config_dir: &Path) -> PathBuf {
    config_dir.join("config.toml")
}

/// Machine defaults used by the E2E tests.
pub fn test_config() -> Config {
    let mut config = Config::new();
    config.machine.name = Some("SWGXYZ".to_string());
    config.machine.gauge = Some("15".to_string());
    config.output.carriers = (1..10).map(|c| c.to_string()).collect();
    config
}

/// The header from the knitout reference example.
pub fn reference_header() -> Header {
    let yarns = YarnCarrierMap::from_pairs(
        [1, 3],
        vec![Yarn::new("50-50 Rust"), Yarn::new("100:0 Magic Blonde")],
    );

    let mut header = Header::new();
    header
        .set_version("2.0")
        .set_carriers_str("0 1 2 3 4 5")
        .set_machine("AS22-SEWSTAR")
        .set_gauge(10)
        .set_yarns(yarns)
        .set_position(StartPosition::Right);
    header
}

/// stdout as text.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// stderr as text.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
