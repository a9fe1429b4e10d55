//! Single knitout instruction lines.
//!
//! Needles and carriers are written with `Display` and never range checked.

use crate::models::{Direction, Instruction};
use std::fmt::Display;

/// Formats one needle instruction as `"{kind} {direction} f{needle} {carrier}\n"`.
///
/// # Example
///
/// ```
/// use knitout::generator::format_instruction;
/// use knitout::models::{Direction, Instruction};
///
/// let line = format_instruction(Instruction::Knit, Direction::Backward, 10, 5);
/// assert_eq!(line, "knit - f10 5\n");
/// ```
pub fn format_instruction(
    kind: Instruction,
    direction: Direction,
    needle: impl Display,
    carrier: impl Display,
) -> String {
    format!("{kind} {direction} f{needle} {carrier}\n")
}

/// Formats a carrier-only instruction as `"{kind} {carrier}\n"`.
pub fn format_hook(kind: Instruction, carrier: impl Display) -> String {
    format!("{kind} {carrier}\n")
}

/// `inhook` line for a carrier.
pub fn inhook(carrier: impl Display) -> String {
    format_hook(Instruction::Inhook, carrier)
}

/// `releasehook` line for a carrier.
pub fn releasehook(carrier: impl Display) -> String {
    format_hook(Instruction::Releasehook, carrier)
}

/// `outhook` line for a carrier.
pub fn outhook(carrier: impl Display) -> String {
    format_hook(Instruction::Outhook, carrier)
}
