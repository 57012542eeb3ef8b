//! The dispatchable technology variant.

use std::ops::Deref;

use gridmix_params::{EconomicParams, TechnicalParams};

use crate::{error::TechnoError, family::Family, techno::Techno};

/// A technology descriptor fixed to [`Family::Dispatchable`].
#[derive(Debug, Clone)]
pub struct Dispatchable<E, T, S>(Techno<E, T, S>);

impl<E: EconomicParams, T: TechnicalParams, S> Dispatchable<E, T, S> {
    /// Creates a dispatchable technology descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`TechnoError`] if the base consistency checks fail.
    pub fn new(
        name: impl Into<String>,
        subtype: impl Into<String>,
        eco: E,
        tech: T,
        dispatch_params: S,
    ) -> Result<Self, TechnoError> {
        Techno::new(Family::Dispatchable, name, subtype, eco, tech, dispatch_params).map(Self)
    }

    /// Returns the dispatch parameters (ramping characteristics).
    #[must_use]
    pub const fn dispatch_params(&self) -> &S {
        self.0.spec_params()
    }

    /// Replaces the dispatch parameters. Plain overwrite.
    pub fn set_dispatch_params(&mut self, dispatch_params: S) {
        self.0.set_spec_params(dispatch_params);
    }

    /// Unwraps into the base descriptor, giving up the family-fixed
    /// wrapper.
    #[must_use]
    pub fn into_techno(self) -> Techno<E, T, S> {
        self.0
    }
}

impl<E, T, S> Deref for Dispatchable<E, T, S> {
    type Target = Techno<E, T, S>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use gridmix_params::{
        DispatchParameters, EconomicParameters, Financing, TechnicalParameters,
    };

    use super::*;

    #[test]
    fn variant_fixes_the_family_tag() {
        let techno = Dispatchable::new(
            "nuclear",
            "new",
            EconomicParameters::new(Financing::Capitalized),
            TechnicalParameters::default(),
            DispatchParameters::new(0.5, 0.5, 0.2),
        )
        .expect("consistent configuration");
        assert_eq!(techno.family(), Family::Dispatchable);
        assert_eq!(techno.name(), "nuclear");
    }

    #[test]
    fn dispatch_params_round_trip() {
        let mut techno = Dispatchable::new(
            "gas",
            "ccgt",
            EconomicParameters::new(Financing::Depreciated),
            TechnicalParameters::default(),
            DispatchParameters::new(0.5, 0.5, 0.2),
        )
        .expect("consistent configuration");

        let faster = DispatchParameters::new(1.0, 1.0, 0.1);
        techno.set_dispatch_params(faster);
        assert_eq!(*techno.dispatch_params(), faster);
    }

    #[test]
    fn base_checks_apply_to_the_variant() {
        let result = Dispatchable::new(
            "gas",
            "ccgt",
            EconomicParameters::default(),
            TechnicalParameters::default(),
            DispatchParameters::new(0.5, 0.5, 0.2),
        );
        assert!(result.is_err());
    }
}
