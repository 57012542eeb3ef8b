//! The technology registry.

use gridmix_params::{EconomicParams, TechnicalParams};
use gridmix_techno::Techno;
use indexmap::IndexMap;

use crate::{
    entry::CatalogEntry,
    error::{CatalogError, CatalogErrorMap},
    id::TechnoId,
};

/// An ordered registry of validated technology descriptors.
///
/// Entries keep their insertion order, so iteration (and any report built
/// from it) follows the order of the source catalog.
#[derive(Debug, Clone)]
pub struct Catalog<E, T, S> {
    technos: IndexMap<TechnoId, Techno<E, T, S>>,
}

impl<E, T, S> Default for Catalog<E, T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, T, S> Catalog<E, T, S> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            technos: IndexMap::new(),
        }
    }

    /// Registers a descriptor under an id, returning the descriptor
    /// previously registered under that id, if any.
    pub fn insert(&mut self, id: TechnoId, techno: Techno<E, T, S>) -> Option<Techno<E, T, S>> {
        self.technos.insert(id, techno)
    }

    /// Returns the descriptor registered under an id, if any.
    #[must_use]
    pub fn get(&self, id: &TechnoId) -> Option<&Techno<E, T, S>> {
        self.technos.get(id)
    }

    /// Returns a mutable reference to the descriptor registered under an
    /// id, if any.
    pub fn get_mut(&mut self, id: &TechnoId) -> Option<&mut Techno<E, T, S>> {
        self.technos.get_mut(id)
    }

    /// Removes and returns the descriptor registered under an id, if any.
    /// Preserves the order of the remaining entries.
    pub fn remove(&mut self, id: &TechnoId) -> Option<Techno<E, T, S>> {
        self.technos.shift_remove(id)
    }

    /// Returns whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: &TechnoId) -> bool {
        self.technos.contains_key(id)
    }

    /// Returns the number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.technos.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.technos.is_empty()
    }

    /// Iterates over ids and descriptors in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, TechnoId, Techno<E, T, S>> {
        self.technos.iter()
    }

    /// Iterates over the registered ids in insertion order.
    pub fn ids(&self) -> indexmap::map::Keys<'_, TechnoId, Techno<E, T, S>> {
        self.technos.keys()
    }
}

impl<E: EconomicParams, T: TechnicalParams, S> Catalog<E, T, S> {
    /// Builds a catalog from a batch of construction requests, collecting
    /// per-entry errors.
    ///
    /// Every entry is attempted: a rejected entry is recorded in the error
    /// map under its id and the load continues with the rest of the batch.
    /// An id that was already seen in the batch is rejected as
    /// [`CatalogError::DuplicateId`]; the first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns `Err((catalog, errors))` if any entry was rejected. The
    /// returned catalog still contains every entry that validated.
    pub fn from_entries<I>(entries: I) -> Result<Self, (Self, CatalogErrorMap)>
    where
        I: IntoIterator<Item = CatalogEntry<E, T, S>>,
    {
        let mut catalog = Self::new();
        let mut errors = CatalogErrorMap::new();

        for entry in entries {
            let CatalogEntry {
                id,
                family,
                name,
                subtype,
                eco,
                tech,
                spec,
            } = entry;

            if catalog.contains(&id) || errors.contains(&id) {
                errors.record(id, CatalogError::DuplicateId);
                continue;
            }

            match Techno::new(family, name, subtype, eco, tech, spec) {
                Ok(techno) => {
                    catalog.insert(id, techno);
                }
                Err(error) => errors.record(id, CatalogError::Techno(error)),
            }
        }

        if errors.is_empty() {
            Ok(catalog)
        } else {
            Err((catalog, errors))
        }
    }
}

impl<'a, E, T, S> IntoIterator for &'a Catalog<E, T, S> {
    type Item = (&'a TechnoId, &'a Techno<E, T, S>);
    type IntoIter = indexmap::map::Iter<'a, TechnoId, Techno<E, T, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
