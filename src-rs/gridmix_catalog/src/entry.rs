//! Batch construction requests.

use gridmix_techno::Family;

use crate::id::TechnoId;

/// One technology construction request in a catalog batch.
///
/// An entry carries everything [`Techno::new`] needs plus the id to
/// register the result under. Entries are consumed by
/// [`Catalog::from_entries`](crate::Catalog::from_entries).
///
/// [`Techno::new`]: gridmix_techno::Techno::new
#[derive(Debug, Clone)]
pub struct CatalogEntry<E, T, S> {
    pub(crate) id: TechnoId,
    pub(crate) family: Family,
    pub(crate) name: String,
    pub(crate) subtype: String,
    pub(crate) eco: E,
    pub(crate) tech: T,
    pub(crate) spec: S,
}

impl<E, T, S> CatalogEntry<E, T, S> {
    /// Creates a construction request.
    pub fn new(
        id: TechnoId,
        family: Family,
        name: impl Into<String>,
        subtype: impl Into<String>,
        eco: E,
        tech: T,
        spec: S,
    ) -> Self {
        Self {
            id,
            family,
            name: name.into(),
            subtype: subtype.into(),
            eco,
            tech,
            spec,
        }
    }

    /// Returns the id the constructed descriptor will be registered under.
    #[must_use]
    pub const fn id(&self) -> &TechnoId {
        &self.id
    }
}
