//! Knitout extension directives.
//!
//! Supported extensions:
//! - `x-stitch-number`
//! - `x-speed-number`
//! - `x-presser-mode`
//!
//! See <https://textiles-lab.github.io/knitout/extensions.html>.
//!
//! Encoded directives carry no trailing newline.

use crate::constants::{MAX_SPEED_NUMBER, MIN_SPEED_NUMBER};
use crate::error::{KnitoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fabric presser mode.
///
/// When no mode is set the machine behaves as [`PresserMode::Off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresserMode {
    /// No fabric presser
    #[default]
    Off,
    /// Presser on passes with only front or only back stitches
    Auto,
    /// Break passes so the presser can always be used
    On,
}

impl PresserMode {
    /// Returns the canonical lowercase value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Auto => "auto",
            Self::On => "on",
        }
    }
}

impl fmt::Display for PresserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresserMode {
    type Err = KnitoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "auto" => Ok(Self::Auto),
            "on" => Ok(Self::On),
            _ => Err(KnitoutError::invalid_value(
                "presser mode",
                s,
                &["off", "auto", "on"],
            )),
        }
    }
}

/// Either a presser mode or text naming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresserModeArg<'a> {
    /// An already-typed mode
    Mode(PresserMode),
    /// Text to match case-insensitively
    Text(&'a str),
}

impl From<PresserMode> for PresserModeArg<'_> {
    fn from(mode: PresserMode) -> Self {
        Self::Mode(mode)
    }
}

impl<'a> From<&'a str> for PresserModeArg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for PresserModeArg<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl PresserModeArg<'_> {
    /// Resolves to a presser mode.
    pub fn resolve(self) -> Result<PresserMode> {
        match self {
            Self::Mode(mode) => Ok(mode),
            Self::Text(text) => text.parse(),
        }
    }
}

/// Encodes the stitch number directive. Any integer is accepted.
#[must_use]
pub fn encode_stitch_number(stitch_num: i64) -> String {
    format!("x-stitch-number {stitch_num}")
}

/// Encodes the speed number directive.
///
/// # Errors
///
/// Returns [`KnitoutError::OutOfRange`] unless `speed_num` is in `0..=15`.
pub fn encode_speed_number(speed_num: i64) -> Result<String> {
    if (MIN_SPEED_NUMBER..=MAX_SPEED_NUMBER).contains(&speed_num) {
        Ok(format!("x-speed-number {speed_num}"))
    } else {
        Err(KnitoutError::OutOfRange {
            field: "speed number",
            value: speed_num,
            min: MIN_SPEED_NUMBER,
            max: MAX_SPEED_NUMBER,
        })
    }
}

/// Encodes the fabric presser mode directive.
///
/// # Errors
///
/// Returns [`KnitoutError::InvalidValue`] when given text other than
/// `off`, `auto` or `on` (in any case).
pub fn encode_presser_mode<'a>(mode: impl Into<PresserModeArg<'a>>) -> Result<String> {
    let mode = mode.into().resolve()?;
    Ok(format!("x-presser-mode {mode}"))
}
