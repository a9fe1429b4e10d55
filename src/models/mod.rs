//! Data model for knitout output.
//!
//! Instruction kinds, directions, yarns and the comment header.

pub mod header;
pub mod instruction;
pub mod position;
pub mod yarn;

// Re-export commonly used types
pub use header::Header;
pub use instruction::{Direction, Instruction};
pub use position::{HeaderPosition, StartPosition};
pub use yarn::{Yarn, YarnCarrierMap};
