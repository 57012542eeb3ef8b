//! Construction errors for technology descriptors.

use std::error::Error;
use std::fmt;

use gridmix_params::CostCategory;

use crate::family::Family;

/// The consistency check a descriptor configuration failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechnoErrorKind {
    /// The economic parameters declare both the capitalized-annuity and the
    /// depreciation representation of capital cost.
    BothFinancingModes,
    /// The economic parameters declare neither representation of capital
    /// cost.
    NoFinancingMode,
    /// A storage charging segment carries a non-empty, all-positive
    /// variable cost profile in the given category.
    AllPositiveChargeCost(CostCategory),
}

/// An inconsistency in a technology's parameter configuration.
///
/// Raised synchronously during descriptor construction, before the
/// descriptor value exists. The error identifies the failing check
/// ([`TechnoError::kind`]) and the offending `(family, name, subtype)`
/// triple, so a misconfigured entry in a bulk-loaded technology catalog can
/// be traced to its source.
///
/// Configuration errors are authoring mistakes in the technology catalog:
/// they are not retryable, and there is no partial-failure mode. A caller
/// loading a batch of technologies may catch the error per entry and
/// continue with the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnoError {
    kind: TechnoErrorKind,
    family: Family,
    name: String,
    subtype: String,
}

impl TechnoError {
    /// Creates an error for a configuration declaring both financing modes.
    #[must_use]
    pub fn both_financing_modes(
        family: Family,
        name: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        Self {
            kind: TechnoErrorKind::BothFinancingModes,
            family,
            name: name.into(),
            subtype: subtype.into(),
        }
    }

    /// Creates an error for a configuration declaring no financing mode.
    #[must_use]
    pub fn no_financing_mode(
        family: Family,
        name: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        Self {
            kind: TechnoErrorKind::NoFinancingMode,
            family,
            name: name.into(),
            subtype: subtype.into(),
        }
    }

    /// Creates an error for a storage charging segment with an all-positive
    /// variable cost profile in `category`.
    #[must_use]
    pub fn all_positive_charge_cost(
        category: CostCategory,
        family: Family,
        name: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        Self {
            kind: TechnoErrorKind::AllPositiveChargeCost(category),
            family,
            name: name.into(),
            subtype: subtype.into(),
        }
    }

    /// Returns the failing consistency check.
    #[must_use]
    pub const fn kind(&self) -> TechnoErrorKind {
        self.kind
    }

    /// Returns the family of the offending configuration.
    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    /// Returns the technology name of the offending configuration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the subtype of the offending configuration.
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }
}

impl fmt::Display for TechnoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TechnoErrorKind::BothFinancingModes => write!(
                f,
                "both capitalized-annuity and depreciation financing modes are set \
                 => {} - {} - {}",
                self.family, self.name, self.subtype
            ),
            TechnoErrorKind::NoFinancingMode => write!(
                f,
                "neither capitalized-annuity nor depreciation financing mode is set \
                 => {} - {} - {}",
                self.family, self.name, self.subtype
            ),
            TechnoErrorKind::AllPositiveChargeCost(category) => write!(
                f,
                "variable {category} cost of a storage charging segment must include \
                 a non-positive value => {} - {} - {}",
                self.family, self.name, self.subtype
            ),
        }
    }
}

impl Error for TechnoError {}
