//! Catalog identifiers.

use std::fmt;

/// An identifier for a technology within a catalog.
///
/// Ids are opaque strings; [`TechnoId::from_parts`] builds the conventional
/// `name.subtype` form used by technology catalogs (e.g. `nuclear.new`,
/// `battery.charge`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TechnoId(String);

impl TechnoId {
    /// Creates an id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates the conventional `name.subtype` id.
    #[must_use]
    pub fn from_parts(name: &str, subtype: &str) -> Self {
        Self(format!("{name}.{subtype}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TechnoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
