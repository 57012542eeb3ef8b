//! Capability traits through which descriptors consume parameter objects.
//!
//! A technology descriptor never inspects a parameter object's internals.
//! It queries the narrow contracts defined here, and every method has a
//! default body: a parameter type overrides exactly the capabilities it
//! supports and inherits permissive defaults for the rest. In particular, a
//! type that declares neither financing predicate reports `false` for both,
//! which the descriptor's consistency check then rejects as "no financing
//! mode". A partially-stubbed collaborator is a validation failure, never a
//! crash.

use std::rc::Rc;

use crate::{cost::CostCategory, series::YearSeries};

/// Economic parameters of a technology, as seen by the descriptor.
///
/// The two predicates describe how the technology's capital cost is
/// represented: as an annuitized capital expenditure (`is_capitalized`) or
/// as depreciation (`is_depreciated`). Exactly one must be true for a
/// descriptor to validate; the defaults make both `false`.
///
/// The four `var_*` accessors return the variable-cost profiles by
/// category. An empty series means the category is not defined for this
/// technology.
pub trait EconomicParams {
    /// Returns whether capital cost is represented as an annuitized
    /// capital expenditure.
    fn is_capitalized(&self) -> bool {
        false
    }

    /// Returns whether capital cost is represented as depreciation.
    fn is_depreciated(&self) -> bool {
        false
    }

    /// Returns the variable operation and maintenance cost profile.
    fn var_om(&self) -> YearSeries {
        YearSeries::new()
    }

    /// Returns the variable fuel cost profile.
    fn var_fuel(&self) -> YearSeries {
        YearSeries::new()
    }

    /// Returns the variable CO2 cost profile.
    fn var_co2(&self) -> YearSeries {
        YearSeries::new()
    }

    /// Returns the miscellaneous variable cost profile.
    fn var_misc(&self) -> YearSeries {
        YearSeries::new()
    }

    /// Returns the variable-cost profile for a category.
    ///
    /// Provided method dispatching to the four category accessors; there is
    /// normally no reason to override it.
    fn variable_cost(&self, category: CostCategory) -> YearSeries {
        match category {
            CostCategory::Om => self.var_om(),
            CostCategory::Fuel => self.var_fuel(),
            CostCategory::Co2 => self.var_co2(),
            CostCategory::Misc => self.var_misc(),
        }
    }

    /// Returns a compact one-line summary for diagnostics, if this
    /// parameter type supports one.
    fn summary(&self) -> Option<String> {
        None
    }
}

/// Technical parameters of a technology, as seen by the descriptor.
///
/// The descriptor stores technical parameters and forwards them to
/// downstream consumers without interpreting them; the only capability it
/// ever uses itself is the optional diagnostic summary.
pub trait TechnicalParams {
    /// Returns a compact one-line summary for diagnostics, if this
    /// parameter type supports one.
    fn summary(&self) -> Option<String> {
        None
    }
}

// Shared parameter objects: several descriptors may hold clones of one
// `Rc`'d parameter object. Note that mutating a shared object through other
// means after descriptors were built triggers no re-validation; the
// descriptor checks its parameters at construction time only.

impl<P: EconomicParams + ?Sized> EconomicParams for Rc<P> {
    fn is_capitalized(&self) -> bool {
        (**self).is_capitalized()
    }

    fn is_depreciated(&self) -> bool {
        (**self).is_depreciated()
    }

    fn var_om(&self) -> YearSeries {
        (**self).var_om()
    }

    fn var_fuel(&self) -> YearSeries {
        (**self).var_fuel()
    }

    fn var_co2(&self) -> YearSeries {
        (**self).var_co2()
    }

    fn var_misc(&self) -> YearSeries {
        (**self).var_misc()
    }

    fn summary(&self) -> Option<String> {
        (**self).summary()
    }
}

impl<P: TechnicalParams + ?Sized> TechnicalParams for Rc<P> {
    fn summary(&self) -> Option<String> {
        (**self).summary()
    }
}
