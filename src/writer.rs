//! Stateful knitout builder.
//!
//! [`KnitoutWriter`] holds a [`Header`] and the instruction lines appended so
//! far. [`KnitoutWriter::compile`] joins them into the final file text.

use crate::error::Result;
use crate::extensions::{
    encode_presser_mode, encode_speed_number, encode_stitch_number, PresserModeArg,
};
use crate::generator::{self, format_instruction, loops};
use crate::models::{Direction, Header, HeaderPosition, Instruction, Yarn, YarnCarrierMap};
use anyhow::Context;
use std::fmt::Display;
use std::path::Path;
use tracing::debug;

/// Accumulates a knitout program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnitoutWriter {
    header: Header,
    instructions: Vec<String>,
}

impl KnitoutWriter {
    /// Creates an empty writer with a default header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer using an existing header.
    #[must_use]
    pub fn with_header(header: Header) -> Self {
        Self {
            header,
            instructions: Vec::new(),
        }
    }

    /// The header that [`compile`](Self::compile) will render.
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Mutable access to the header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Instruction lines appended so far, in order.
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    // ------------------------------------------------------------------
    // Header setters
    // ------------------------------------------------------------------

    /// Sets the knitout version.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.header.set_version(version);
    }

    /// Sets the carriers in front-to-back order.
    pub fn set_carriers<I>(&mut self, carriers: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.header.set_carriers(carriers);
    }

    /// Sets the machine name.
    pub fn set_machine(&mut self, machine: impl Into<String>) {
        self.header.set_machine(machine);
    }

    /// Sets the gauge.
    pub fn set_gauge(&mut self, gauge: impl Display) {
        self.header.set_gauge(gauge);
    }

    /// Replaces the whole carrier-to-yarn mapping.
    pub fn set_yarns(&mut self, yarns: YarnCarrierMap) {
        self.header.set_yarns(yarns);
    }

    /// Sets the start position.
    pub fn set_position(&mut self, position: impl Into<HeaderPosition>) {
        self.header.set_position(position);
    }

    /// Loads a yarn into a carrier.
    pub fn set_yarn(&mut self, carrier: impl Display, yarn: impl Into<Yarn>) {
        self.header.set_yarn(carrier, yarn);
    }

    /// Adds an extra header comment line.
    pub fn add_header_field(&mut self, key: impl Into<String>, value: impl Display) {
        self.header.add_field(key, value);
    }

    // ------------------------------------------------------------------
    // Extensions
    // ------------------------------------------------------------------

    /// Appends an `x-presser-mode` directive.
    pub fn fabric_presser<'a>(&mut self, mode: impl Into<PresserModeArg<'a>>) -> Result<()> {
        let line = encode_presser_mode(mode)?;
        self.push_directive(line);
        Ok(())
    }

    /// Appends an `x-speed-number` directive.
    pub fn speed(&mut self, speed_num: i64) -> Result<()> {
        let line = encode_speed_number(speed_num)?;
        self.push_directive(line);
        Ok(())
    }

    /// Appends an `x-stitch-number` directive.
    pub fn stitch(&mut self, stitch_num: i64) {
        self.push_directive(encode_stitch_number(stitch_num));
    }

    // ------------------------------------------------------------------
    // Instructions
    // ------------------------------------------------------------------

    /// Appends any needle instruction.
    pub fn instruction(
        &mut self,
        kind: Instruction,
        direction: Direction,
        needle: impl Display,
        carrier: impl Display,
    ) {
        self.push(format_instruction(kind, direction, needle, carrier));
    }

    /// Appends a `knit`.
    pub fn knit(&mut self, direction: Direction, needle: impl Display, carrier: impl Display) {
        self.instruction(Instruction::Knit, direction, needle, carrier);
    }

    /// Appends a `tuck`.
    pub fn tuck(&mut self, direction: Direction, needle: impl Display, carrier: impl Display) {
        self.instruction(Instruction::Tuck, direction, needle, carrier);
    }

    /// Appends a `miss`.
    pub fn miss(&mut self, direction: Direction, needle: impl Display, carrier: impl Display) {
        self.instruction(Instruction::Miss, direction, needle, carrier);
    }

    /// Appends a `split`.
    pub fn split(&mut self, direction: Direction, needle: impl Display, carrier: impl Display) {
        self.instruction(Instruction::Split, direction, needle, carrier);
    }

    /// Appends a `drop`.
    pub fn drop(&mut self, direction: Direction, needle: impl Display, carrier: impl Display) {
        self.instruction(Instruction::Drop, direction, needle, carrier);
    }

    /// Appends an `amiss`.
    pub fn amiss(&mut self, direction: Direction, needle: impl Display, carrier: impl Display) {
        self.instruction(Instruction::Amiss, direction, needle, carrier);
    }

    /// Appends an `xfer`.
    pub fn xfer(&mut self, direction: Direction, needle: impl Display, carrier: impl Display) {
        self.instruction(Instruction::Xfer, direction, needle, carrier);
    }

    /// Appends an `inhook`.
    pub fn inhook(&mut self, carrier: impl Display) {
        self.push(generator::inhook(carrier));
    }

    /// Appends a `releasehook`.
    pub fn releasehook(&mut self, carrier: impl Display) {
        self.push(generator::releasehook(carrier));
    }

    /// Appends an `outhook`.
    pub fn outhook(&mut self, carrier: impl Display) {
        self.push(generator::outhook(carrier));
    }

    /// Appends one knit line per needle of a full pass.
    pub fn knit_row(&mut self, width: u32, direction: Direction, carrier: impl Display) {
        self.instructions
            .extend(loops::knit_row_lines(width, direction, carrier));
    }

    /// Appends an alternating tuck/miss cast-on pass.
    pub fn tuck_miss_sweep(&mut self, width: u32, direction: Direction, carrier: impl Display) {
        self.instructions
            .extend(loops::tuck_miss_lines(width, direction, carrier));
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Drops all instructions. The header is kept.
    pub fn clear(&mut self) {
        debug!(count = self.instructions.len(), "clearing instructions");
        self.instructions.clear();
    }

    /// Renders the header followed by every instruction in append order.
    #[must_use]
    pub fn compile(&self) -> String {
        let mut output = self.header.render();
        for line in &self.instructions {
            output.push_str(line);
        }
        debug!(
            lines = self.instructions.len(),
            bytes = output.len(),
            "compiled knitout"
        );
        output
    }

    /// Writes the compiled program to `path`, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.compile())
            .with_context(|| format!("Failed to write knitout file: {}", path.display()))?;
        debug!(path = %path.display(), "wrote knitout file");
        Ok(())
    }

    fn push(&mut self, line: String) {
        self.instructions.push(line);
    }

    fn push_directive(&mut self, mut directive: String) {
        directive.push('\n');
        self.push(directive);
    }
}
