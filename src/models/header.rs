//! Knitout comment header.

use crate::constants::DEFAULT_KNITOUT_VERSION;
use crate::models::position::HeaderPosition;
use crate::models::yarn::{Yarn, YarnCarrierMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// Comment header written at the top of a knitout file.
///
/// Rendered lines, in order:
///
/// ```text
/// ;!knitout-{version}
/// ;;Machine: {machine}        (only if set)
/// ;;Gauge: {gauge}            (only if set)
/// ;;Yarn-{carrier}: {yarn}    (one per carrier with a yarn)
/// ;;Carriers: {carriers}      (only if any carriers)
/// ;;{key}: {value}            (one per extra field)
/// ;;Position: {position}
/// ```
///
/// followed by a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Version in the magic line
    pub version: String,
    /// Carrier names in front-to-back order
    pub carriers: Vec<String>,
    /// Model name of the target machine
    pub machine: Option<String>,
    /// Needles per inch of the target machine
    pub gauge: Option<String>,
    /// Yarn loaded in each carrier
    pub yarns: YarnCarrierMap,
    /// Where to place the operations on the needle bed
    pub position: HeaderPosition,
    /// Additional `;;Key: value` comment lines
    pub extra_fields: Vec<(String, String)>,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    /// Creates a header with the default version and no machine settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: DEFAULT_KNITOUT_VERSION.to_string(),
            carriers: Vec::new(),
            machine: None,
            gauge: None,
            yarns: YarnCarrierMap::new(),
            position: HeaderPosition::default(),
            extra_fields: Vec::new(),
        }
    }

    /// Sets the version written in the magic line.
    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = version.into();
        self
    }

    /// Replaces the carrier list.
    pub fn set_carriers<I>(&mut self, carriers: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.carriers = carriers.into_iter().map(|c| c.to_string()).collect();
        self
    }

    /// Replaces the carrier list from a whitespace-separated string such as `"0 1 2 3"`.
    pub fn set_carriers_str(&mut self, carriers: &str) -> &mut Self {
        self.set_carriers(carriers.split_whitespace())
    }

    /// Sets the machine name.
    pub fn set_machine(&mut self, machine: impl Into<String>) -> &mut Self {
        self.machine = Some(machine.into());
        self
    }

    /// Sets the gauge. Accepts anything printable, e.g. `15` or `"15"`.
    pub fn set_gauge(&mut self, gauge: impl fmt::Display) -> &mut Self {
        self.gauge = Some(gauge.to_string());
        self
    }

    /// Replaces the whole carrier-to-yarn mapping.
    pub fn set_yarns(&mut self, yarns: YarnCarrierMap) -> &mut Self {
        self.yarns = yarns;
        self
    }

    /// Loads a yarn into a carrier.
    pub fn set_yarn(&mut self, carrier: impl fmt::Display, yarn: impl Into<Yarn>) -> &mut Self {
        self.yarns.insert(carrier.to_string(), Some(yarn.into()));
        self
    }

    /// Sets the start position.
    pub fn set_position(&mut self, position: impl Into<HeaderPosition>) -> &mut Self {
        self.position = position.into();
        self
    }

    /// Appends an extra `;;{key}: {value}` line.
    pub fn add_field(&mut self, key: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.extra_fields.push((key.into(), value.to_string()));
        self
    }

    /// Renders the header text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, ";!knitout-{}", self.version);

        if let Some(machine) = self.machine.as_deref().filter(|m| !m.is_empty()) {
            let _ = writeln!(output, ";;Machine: {machine}");
        }

        if let Some(gauge) = self.gauge.as_deref().filter(|g| !g.is_empty()) {
            let _ = writeln!(output, ";;Gauge: {gauge}");
        }

        for (carrier, yarn) in self.yarns.assigned() {
            let _ = writeln!(output, ";;Yarn-{}: {}", carrier, yarn.name);
        }

        if !self.carriers.is_empty() {
            let _ = writeln!(output, ";;Carriers: {}", self.carriers.join(" "));
        }

        for (key, value) in &self.extra_fields {
            let _ = writeln!(output, ";;{key}: {value}");
        }

        let _ = write!(output, ";;Position: {}\n\n", self.position);

        output
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::position::StartPosition;

    #[test]
    fn test_header_matches_reference_output() {
        let mut header = Header::new();
        header
            .set_version("2.0")
            .set_carriers_str("0 1 2 3")
            .set_machine("SWG091N2")
            .set_gauge("15")
            .set_yarn(1, "50-50 Rust")
            .set_yarn(3, "100:0 Magic Blonde")
            .set_position("Right");

        let expected = ";!knitout-2.0\n;;Machine: SWG091N2\n;;Gauge: 15\n;;Yarn-1: 50-50 Rust\n\
                        ;;Yarn-3: 100:0 Magic Blonde\n;;Carriers: 0 1 2 3\n;;Position: Right\n\n";
        assert_eq!(header.render(), expected);
    }

    #[test]
    fn test_standard_position_is_lowercase() {
        let mut header = Header::new();
        header
            .set_version("2.0")
            .set_carriers_str("0 1 2 3")
            .set_machine("DE-FN1922")
            .set_gauge(15)
            .set_yarn(1, Yarn::new("50-50 Silver Silk"))
            .set_position(StartPosition::Center);

        assert_eq!(
            header.to_string(),
            ";!knitout-2.0\n;;Machine: DE-FN1922\n;;Gauge: 15\n;;Yarn-1: 50-50 Silver Silk\n\
             ;;Carriers: 0 1 2 3\n;;Position: center\n\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut header = Header::new();
        header.set_machine("SWGXYZ").set_gauge(15).set_carriers(1..10);
        let first = header.render();
        let second = header.render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_optional_fields_are_omitted() {
        let header = Header::new();
        assert_eq!(header.render(), ";!knitout-2\n;;Position: right\n\n");

        let mut blank_machine = Header::new();
        blank_machine.set_machine("").set_gauge("");
        assert_eq!(blank_machine.render(), header.render());
    }

    #[test]
    fn test_carrier_without_yarn_has_no_yarn_line() {
        let mut header = Header::new();
        header.set_carriers_str("1 2");
        header.yarns.insert("1", None);
        header.set_yarn(2, "Ashkani Blue");

        let text = header.render();
        assert!(!text.contains(";;Yarn-1"));
        assert!(text.contains(";;Yarn-2: Ashkani Blue\n"));
    }

    #[test]
    fn test_extra_fields_follow_carriers_in_insertion_order() {
        let mut header = Header::new();
        header
            .set_carriers_str("1")
            .add_field("Author", "Ada")
            .add_field("Width", 40);

        assert_eq!(
            header.render(),
            ";!knitout-2\n;;Carriers: 1\n;;Author: Ada\n;;Width: 40\n;;Position: right\n\n"
        );
    }

    #[test]
    fn test_magic_string_uses_version() {
        let mut header = Header::new();
        header.set_version("0.1");
        let magic = header.render().lines().next().map(str::to_string);
        assert_eq!(magic.as_deref(), Some(";!knitout-0.1"));
    }
}
