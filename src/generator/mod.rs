//! Instruction line generation.
//!
//! `format` builds single lines; `loops` expands needle sequences and the
//! common cast-on and row passes into many lines.

pub mod format;
pub mod loops;

pub use format::{format_hook, format_instruction, inhook, outhook, releasehook};
pub use loops::{expand_loop, knit_loop, knit_row, tuck_loop, tuck_miss_sweep};
