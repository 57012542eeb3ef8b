//! Variable-cost categories.

use std::fmt;

/// The four variable-cost categories carried by a technology's economic
/// parameters.
///
/// Every category maps years to a cost per unit of energy. The labels
/// produced by [`CostCategory::label`] are the ones used in technology
/// catalogs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostCategory {
    /// Variable operation and maintenance cost.
    Om,
    /// Variable fuel cost.
    Fuel,
    /// Variable CO2 cost.
    Co2,
    /// Miscellaneous variable cost ("MI" in technology catalogs).
    Misc,
}

impl CostCategory {
    /// All categories, in catalog order.
    pub const ALL: [Self; 4] = [Self::Om, Self::Fuel, Self::Co2, Self::Misc];

    /// Returns the catalog label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Om => "OM",
            Self::Fuel => "Fuel",
            Self::Co2 => "CO2",
            Self::Misc => "MI",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
