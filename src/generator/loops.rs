//! Repeated instruction lines over a run of needles.

use crate::generator::format::format_instruction;
use crate::models::{Direction, Instruction};
use std::fmt::Display;

/// Emits one `kind` line per needle, in the order given.
///
/// No reordering or deduplication happens: to walk right to left, pass a
/// reversed sequence. An empty sequence yields an empty string.
pub fn expand_loop<I>(
    kind: Instruction,
    needles: I,
    direction: Direction,
    carrier: impl Display,
) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let carrier = carrier.to_string();
    needles
        .into_iter()
        .map(|needle| format_instruction(kind, direction, needle, &carrier))
        .collect()
}

/// A run of `knit` lines.
pub fn knit_loop<I>(needles: I, direction: Direction, carrier: impl Display) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    expand_loop(Instruction::Knit, needles, direction, carrier)
}

/// A run of `tuck` lines.
pub fn tuck_loop<I>(needles: I, direction: Direction, carrier: impl Display) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    expand_loop(Instruction::Tuck, needles, direction, carrier)
}

/// Needles visited by a full pass over a bed `width` needles wide.
///
/// Backward passes run from `width` down to 0 inclusive; forward passes run
/// from 1 up to `width - 1`.
fn pass_needles(width: u32, direction: Direction) -> Box<dyn Iterator<Item = u32>> {
    match direction {
        Direction::Backward => Box::new((0..=width).rev()),
        Direction::Forward => Box::new(1..width),
    }
}

/// Alternating tuck/miss cast-on pass.
///
/// Backward passes tuck even needles and miss odd ones; forward passes tuck
/// odd needles and miss even ones.
pub fn tuck_miss_sweep(width: u32, direction: Direction, carrier: impl Display) -> String {
    tuck_miss_lines(width, direction, carrier).collect()
}

/// Lines of [`tuck_miss_sweep`], one per needle.
pub(crate) fn tuck_miss_lines(
    width: u32,
    direction: Direction,
    carrier: impl Display,
) -> impl Iterator<Item = String> {
    let carrier = carrier.to_string();
    let tuck_parity = match direction {
        Direction::Backward => 0,
        Direction::Forward => 1,
    };

    pass_needles(width, direction).map(move |needle| {
        let kind = if needle % 2 == tuck_parity {
            Instruction::Tuck
        } else {
            Instruction::Miss
        };
        format_instruction(kind, direction, needle, &carrier)
    })
}

/// One knit pass over a bed `width` needles wide, with the same bounds as
/// [`tuck_miss_sweep`].
pub fn knit_row(width: u32, direction: Direction, carrier: impl Display) -> String {
    knit_row_lines(width, direction, carrier).collect()
}

/// Lines of [`knit_row`], one per needle.
pub(crate) fn knit_row_lines(
    width: u32,
    direction: Direction,
    carrier: impl Display,
) -> impl Iterator<Item = String> {
    let carrier = carrier.to_string();
    pass_needles(width, direction)
        .map(move |needle| format_instruction(Instruction::Knit, direction, needle, &carrier))
}
