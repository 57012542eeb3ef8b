//! The storage technology variant.

use std::ops::Deref;

use gridmix_params::{EconomicParams, TechnicalParams};

use crate::{error::TechnoError, family::Family, techno::Techno};

/// A technology descriptor fixed to [`Family::Storage`].
///
/// Storage technologies are modelled as charge/discharge segment pairs;
/// the charging segment (subtype [`CHARGE_SUBTYPE`]) is subject to the
/// non-positive variable-cost check run by the base constructor.
///
/// [`CHARGE_SUBTYPE`]: crate::CHARGE_SUBTYPE
#[derive(Debug, Clone)]
pub struct Storage<E, T, S>(Techno<E, T, S>);

impl<E: EconomicParams, T: TechnicalParams, S> Storage<E, T, S> {
    /// Creates a storage technology descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`TechnoError`] if the base consistency checks fail.
    pub fn new(
        name: impl Into<String>,
        subtype: impl Into<String>,
        eco: E,
        tech: T,
        storage_params: S,
    ) -> Result<Self, TechnoError> {
        Techno::new(Family::Storage, name, subtype, eco, tech, storage_params).map(Self)
    }

    /// Returns the storage parameters (charge/discharge characteristics).
    #[must_use]
    pub const fn storage_params(&self) -> &S {
        self.0.spec_params()
    }

    /// Replaces the storage parameters. Plain overwrite.
    pub fn set_storage_params(&mut self, storage_params: S) {
        self.0.set_spec_params(storage_params);
    }

    /// Unwraps into the base descriptor, giving up the family-fixed
    /// wrapper.
    #[must_use]
    pub fn into_techno(self) -> Techno<E, T, S> {
        self.0
    }
}

impl<E, T, S> Deref for Storage<E, T, S> {
    type Target = Techno<E, T, S>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
