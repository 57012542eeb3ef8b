//! Error collection for catalog batch construction.

use std::error::Error;
use std::fmt;

use gridmix_techno::TechnoError;
use indexmap::IndexMap;

use crate::id::TechnoId;

/// Why a catalog entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The descriptor failed its consistency checks.
    Techno(TechnoError),
    /// The entry reuses an id already seen in the batch. The first
    /// occurrence wins; later ones are rejected.
    DuplicateId,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Techno(error) => error.fmt(f),
            Self::DuplicateId => f.write_str("duplicate technology id in catalog batch"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Techno(error) => Some(error),
            Self::DuplicateId => None,
        }
    }
}

impl From<TechnoError> for CatalogError {
    fn from(error: TechnoError) -> Self {
        Self::Techno(error)
    }
}

/// The per-entry errors collected while building a catalog batch.
///
/// One error is kept per id (the first one encountered), so a rejected
/// entry is always reported under the check that rejected it, not under a
/// later duplicate of the same id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogErrorMap {
    errors: IndexMap<TechnoId, CatalogError>,
}

impl CatalogErrorMap {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for an id, keeping any error already recorded.
    pub(crate) fn record(&mut self, id: TechnoId, error: CatalogError) {
        self.errors.entry(id).or_insert(error);
    }

    /// Returns the error recorded for an id, if any.
    #[must_use]
    pub fn get(&self, id: &TechnoId) -> Option<&CatalogError> {
        self.errors.get(id)
    }

    /// Returns whether an id has a recorded error.
    #[must_use]
    pub fn contains(&self, id: &TechnoId) -> bool {
        self.errors.contains_key(id)
    }

    /// Returns the number of rejected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns whether no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the rejected ids and their errors, in batch order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, TechnoId, CatalogError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a CatalogErrorMap {
    type Item = (&'a TechnoId, &'a CatalogError);
    type IntoIter = indexmap::map::Iter<'a, TechnoId, CatalogError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
