//! Yarns and their assignment to carriers.

use serde::{Deserialize, Serialize};

/// A yarn loaded into a carrier.
///
/// Only the name is written to the header. The remaining fields describe the
/// yarn for callers that track it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Yarn {
    /// Display name (e.g. "50-50 Rust")
    pub name: String,
    /// Yarn color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fiber type (e.g. "wool", "acrylic")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_type: Option<String>,
    /// Wraps per inch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_count: Option<u32>,
}

impl Yarn {
    /// Creates a yarn with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the fiber type.
    pub fn with_fiber_type(mut self, fiber_type: impl Into<String>) -> Self {
        self.fiber_type = Some(fiber_type.into());
        self
    }

    /// Sets the wrap count.
    #[must_use]
    pub const fn with_wrap_count(mut self, wrap_count: u32) -> Self {
        self.wrap_count = Some(wrap_count);
        self
    }

    /// Renames the yarn.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets or clears the color.
    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
    }

    /// Sets or clears the fiber type.
    pub fn set_fiber_type(&mut self, fiber_type: Option<String>) {
        self.fiber_type = fiber_type;
    }

    /// Sets or clears the wrap count.
    pub fn set_wrap_count(&mut self, wrap_count: Option<u32>) {
        self.wrap_count = wrap_count;
    }
}

impl From<&str> for Yarn {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Yarn {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Ordered mapping from carrier identifier to the yarn it holds.
///
/// Entries keep insertion order. A carrier may be present without a yarn;
/// such carriers produce no `;;Yarn-` line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YarnCarrierMap {
    entries: Vec<(String, Option<Yarn>)>,
}

impl YarnCarrierMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a map by pairing carriers with yarns position by position.
    ///
    /// Extra carriers or yarns beyond the shorter list are ignored.
    pub fn from_pairs<C, Y>(carriers: C, yarns: Y) -> Self
    where
        C: IntoIterator,
        C::Item: ToString,
        Y: IntoIterator<Item = Yarn>,
    {
        let mut map = Self::new();
        for (carrier, yarn) in carriers.into_iter().zip(yarns) {
            map.insert(carrier.to_string(), Some(yarn));
        }
        map
    }

    /// Assigns a yarn (or no yarn) to a carrier.
    ///
    /// An existing carrier keeps its position and has its yarn replaced.
    /// Returns the previous entry if the carrier was present.
    pub fn insert(&mut self, carrier: impl Into<String>, yarn: Option<Yarn>) -> Option<Option<Yarn>> {
        let carrier = carrier.into();
        if let Some(slot) = self.entries.iter_mut().find(|(c, _)| *c == carrier) {
            return Some(std::mem::replace(&mut slot.1, yarn));
        }
        self.entries.push((carrier, yarn));
        None
    }

    /// Looks up the yarn assigned to a carrier.
    ///
    /// Returns `None` both when the carrier is absent and when it has no yarn;
    /// use [`contains`](Self::contains) to tell them apart.
    #[must_use]
    pub fn get(&self, carrier: &str) -> Option<&Yarn> {
        self.entries
            .iter()
            .find(|(c, _)| c == carrier)
            .and_then(|(_, yarn)| yarn.as_ref())
    }

    /// Mutable access to the yarn assigned to a carrier.
    pub fn get_mut(&mut self, carrier: &str) -> Option<&mut Yarn> {
        self.entries
            .iter_mut()
            .find(|(c, _)| c == carrier)
            .and_then(|(_, yarn)| yarn.as_mut())
    }

    /// Removes a carrier, returning its entry if it was present.
    pub fn remove(&mut self, carrier: &str) -> Option<Option<Yarn>> {
        let idx = self.entries.iter().position(|(c, _)| c == carrier)?;
        Some(self.entries.remove(idx).1)
    }

    /// Returns true if the carrier is in the map, with or without a yarn.
    #[must_use]
    pub fn contains(&self, carrier: &str) -> bool {
        self.entries.iter().any(|(c, _)| c == carrier)
    }

    /// Number of carriers in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no carriers are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Yarn>)> {
        self.entries
            .iter()
            .map(|(carrier, yarn)| (carrier.as_str(), yarn.as_ref()))
    }

    /// Iterates over carriers that have a yarn assigned.
    pub fn assigned(&self) -> impl Iterator<Item = (&str, &Yarn)> {
        self.entries
            .iter()
            .filter_map(|(carrier, yarn)| yarn.as_ref().map(|y| (carrier.as_str(), y)))
    }
}

impl<C: Into<String>, Y: Into<Yarn>> FromIterator<(C, Y)> for YarnCarrierMap {
    fn from_iter<I: IntoIterator<Item = (C, Y)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (carrier, yarn) in iter {
            map.insert(carrier, Some(yarn.into()));
        }
        map
    }
}
