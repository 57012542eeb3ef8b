//! The fatal (must-run) technology variant.

use std::ops::Deref;

use gridmix_params::{EconomicParams, TechnicalParams};

use crate::{error::TechnoError, family::Family, techno::Techno};

/// A technology descriptor fixed to [`Family::Fatal`].
#[derive(Debug, Clone)]
pub struct Fatal<E, T, S>(Techno<E, T, S>);

impl<E: EconomicParams, T: TechnicalParams, S> Fatal<E, T, S> {
    /// Creates a fatal technology descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`TechnoError`] if the base consistency checks fail.
    pub fn new(
        name: impl Into<String>,
        subtype: impl Into<String>,
        eco: E,
        tech: T,
        fatal_params: S,
    ) -> Result<Self, TechnoError> {
        Techno::new(Family::Fatal, name, subtype, eco, tech, fatal_params).map(Self)
    }

    /// Returns the fatal parameters (availability profile).
    #[must_use]
    pub const fn fatal_params(&self) -> &S {
        self.0.spec_params()
    }

    /// Replaces the fatal parameters. Plain overwrite.
    pub fn set_fatal_params(&mut self, fatal_params: S) {
        self.0.set_spec_params(fatal_params);
    }

    /// Unwraps into the base descriptor, giving up the family-fixed
    /// wrapper.
    #[must_use]
    pub fn into_techno(self) -> Techno<E, T, S> {
        self.0
    }
}

impl<E, T, S> Deref for Fatal<E, T, S> {
    type Target = Techno<E, T, S>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use gridmix_params::{
        EconomicParameters, FatalParameters, Financing, TechnicalParameters,
    };

    use super::*;

    #[test]
    fn variant_fixes_the_family_tag() {
        let availability = [(2030, 0.24), (2040, 0.26)].into_iter().collect();
        let techno = Fatal::new(
            "vre",
            "pv",
            EconomicParameters::new(Financing::Capitalized),
            TechnicalParameters::default(),
            FatalParameters::new(availability),
        )
        .expect("consistent configuration");
        assert_eq!(techno.family(), Family::Fatal);
        assert_eq!(techno.subtype(), "pv");
        assert_eq!(techno.fatal_params().availability().len(), 2);
    }
}
