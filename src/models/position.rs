//! Start position of the operations on the needle bed.

use crate::error::{KnitoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard values for the `;;Position` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPosition {
    /// Align to the right of the bed
    #[default]
    Right,
    /// Align to the left of the bed
    Left,
    /// Center on the bed
    Center,
    /// Use needle numbers as given
    Keep,
}

impl StartPosition {
    /// Returns the canonical lowercase form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Center => "center",
            Self::Keep => "keep",
        }
    }
}

impl fmt::Display for StartPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartPosition {
    type Err = KnitoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "keep" => Ok(Self::Keep),
            _ => Err(KnitoutError::invalid_value(
                "start position",
                s,
                &["right", "left", "center", "keep"],
            )),
        }
    }
}

/// Value written after `;;Position:`.
///
/// A [`StartPosition`] renders in its canonical lowercase form. Free text is
/// written verbatim, so `"Right"` stays capitalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderPosition {
    /// One of the standard positions
    Standard(StartPosition),
    /// Any other text, rendered as given
    Custom(String),
}

impl Default for HeaderPosition {
    fn default() -> Self {
        Self::Standard(StartPosition::default())
    }
}

impl fmt::Display for HeaderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(pos) => write!(f, "{pos}"),
            Self::Custom(text) => f.write_str(text),
        }
    }
}

impl From<StartPosition> for HeaderPosition {
    fn from(pos: StartPosition) -> Self {
        Self::Standard(pos)
    }
}

impl From<&str> for HeaderPosition {
    fn from(text: &str) -> Self {
        Self::Custom(text.to_string())
    }
}

impl From<String> for HeaderPosition {
    fn from(text: String) -> Self {
        Self::Custom(text)
    }
}
