//! knitout library
//!
//! Generates knitout, the line-oriented instruction format for industrial
//! knitting machines, from Rust code: a comment header, single instruction
//! lines, loops over needle ranges and the supported extension directives.
//!
//! ```
//! use knitout::models::Direction;
//! use knitout::KnitoutWriter;
//!
//! let mut writer = KnitoutWriter::new();
//! writer.set_carriers(["1", "2"]);
//! writer.inhook(1);
//! writer.knit(Direction::Backward, 3, 1);
//!
//! assert!(writer.compile().ends_with("inhook 1\nknit - f3 1\n"));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extensions;
pub mod generator;
pub mod models;
pub mod writer;

pub use error::KnitoutError;
pub use writer::KnitoutWriter;
