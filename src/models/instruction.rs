//! Instruction kinds and carriage directions.

use crate::error::{KnitoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instructions available in knitout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instruction {
    /// Bring a carrier in using the yarn inserting hook
    Inhook,
    /// Release the yarn inserting hook
    Releasehook,
    /// Take a carrier out using the yarn inserting hook
    Outhook,
    /// Pull a loop through the loops on a needle
    Knit,
    /// Add a loop to a needle without knitting through
    Tuck,
    /// Pull a loop and move the old loops to the opposite bed
    Split,
    /// Drop the loops held on a needle
    Drop,
    /// Miss with a carrier-free carriage pass
    Amiss,
    /// Move a carrier past a needle without forming a loop
    Miss,
    /// Transfer loops to the opposite bed
    Xfer,
}

impl Instruction {
    /// Every instruction kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Inhook,
        Self::Releasehook,
        Self::Outhook,
        Self::Knit,
        Self::Tuck,
        Self::Split,
        Self::Drop,
        Self::Amiss,
        Self::Miss,
        Self::Xfer,
    ];

    /// Returns the opcode as it appears in a knitout file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inhook => "inhook",
            Self::Releasehook => "releasehook",
            Self::Outhook => "outhook",
            Self::Knit => "knit",
            Self::Tuck => "tuck",
            Self::Split => "split",
            Self::Drop => "drop",
            Self::Amiss => "amiss",
            Self::Miss => "miss",
            Self::Xfer => "xfer",
        }
    }

    /// Returns true for the yarn inserting hook instructions, which take
    /// only a carrier operand.
    #[must_use]
    pub const fn is_hook(self) -> bool {
        matches!(self, Self::Inhook | Self::Releasehook | Self::Outhook)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Instruction {
    type Err = KnitoutError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|instr| instr.as_str() == lowered)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|i| i.as_str()).collect();
                KnitoutError::invalid_value("instruction", s, &names)
            })
    }
}

/// Direction of a carriage pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right, written `+`
    #[serde(rename = "+")]
    Forward,
    /// Right to left, written `-`
    #[serde(rename = "-")]
    Backward,
}

impl Direction {
    /// Returns the direction symbol (`+` or `-`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "+",
            Self::Backward => "-",
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = KnitoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "+" | "forward" => Ok(Self::Forward),
            "-" | "backward" => Ok(Self::Backward),
            _ => Err(KnitoutError::invalid_value(
                "direction",
                s,
                &["+", "-", "forward", "backward"],
            )),
        }
    }
}
