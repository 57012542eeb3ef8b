//! Concrete economic parameters.

use std::fmt;

use crate::{series::YearSeries, traits::EconomicParams};

/// How a technology's capital cost is represented.
///
/// A well-formed catalog entry uses exactly one representation, so the
/// concrete type makes the choice a two-variant enum that cannot express
/// "both" or "neither". Descriptors built from hand-written
/// [`EconomicParams`] implementations are still validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Financing {
    /// Capital cost is an annuitized capital expenditure.
    Capitalized,
    /// Capital cost is represented as depreciation.
    Depreciated,
}

impl fmt::Display for Financing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capitalized => f.write_str("capitalized annuity"),
            Self::Depreciated => f.write_str("depreciation"),
        }
    }
}

/// Economic parameters of a technology: financing mode and the four
/// variable-cost profiles.
///
/// Built with [`EconomicParameters::new`] and the `with_*` methods:
///
/// ```rust
/// use gridmix_params::{EconomicParameters, Financing};
///
/// let eco = EconomicParameters::new(Financing::Capitalized)
///     .with_var_fuel([(2030, 32.0), (2040, 28.0)].into_iter().collect());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EconomicParameters {
    financing: Option<Financing>,
    var_om: YearSeries,
    var_fuel: YearSeries,
    var_co2: YearSeries,
    var_misc: YearSeries,
}

impl EconomicParameters {
    /// Creates economic parameters with the given financing mode and empty
    /// cost profiles.
    #[must_use]
    pub fn new(financing: Financing) -> Self {
        Self {
            financing: Some(financing),
            ..Self::default()
        }
    }

    /// Replaces the variable operation and maintenance cost profile.
    #[must_use]
    pub fn with_var_om(mut self, series: YearSeries) -> Self {
        self.var_om = series;
        self
    }

    /// Replaces the variable fuel cost profile.
    #[must_use]
    pub fn with_var_fuel(mut self, series: YearSeries) -> Self {
        self.var_fuel = series;
        self
    }

    /// Replaces the variable CO2 cost profile.
    #[must_use]
    pub fn with_var_co2(mut self, series: YearSeries) -> Self {
        self.var_co2 = series;
        self
    }

    /// Replaces the miscellaneous variable cost profile.
    #[must_use]
    pub fn with_var_misc(mut self, series: YearSeries) -> Self {
        self.var_misc = series;
        self
    }

    /// Returns the financing mode, if one was set.
    #[must_use]
    pub const fn financing(&self) -> Option<Financing> {
        self.financing
    }
}

impl EconomicParams for EconomicParameters {
    fn is_capitalized(&self) -> bool {
        matches!(self.financing, Some(Financing::Capitalized))
    }

    fn is_depreciated(&self) -> bool {
        matches!(self.financing, Some(Financing::Depreciated))
    }

    fn var_om(&self) -> YearSeries {
        self.var_om.clone()
    }

    fn var_fuel(&self) -> YearSeries {
        self.var_fuel.clone()
    }

    fn var_co2(&self) -> YearSeries {
        self.var_co2.clone()
    }

    fn var_misc(&self) -> YearSeries {
        self.var_misc.clone()
    }

    fn summary(&self) -> Option<String> {
        let financing = self
            .financing
            .map_or_else(|| "none".to_string(), |mode| mode.to_string());
        let defined: Vec<String> = [
            ("OM", &self.var_om),
            ("Fuel", &self.var_fuel),
            ("CO2", &self.var_co2),
            ("MI", &self.var_misc),
        ]
        .into_iter()
        .filter(|(_, series)| !series.is_empty())
        .map(|(label, series)| format!("{label}({} years)", series.len()))
        .collect();
        let costs = if defined.is_empty() {
            "none".to_string()
        } else {
            defined.join(", ")
        };
        Some(format!("financing: {financing}; variable costs: {costs}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn financing_mode_is_exclusive() {
        let cap = EconomicParameters::new(Financing::Capitalized);
        assert!(cap.is_capitalized());
        assert!(!cap.is_depreciated());

        let dep = EconomicParameters::new(Financing::Depreciated);
        assert!(!dep.is_capitalized());
        assert!(dep.is_depreciated());
    }

    #[test]
    fn default_has_no_financing_mode() {
        let eco = EconomicParameters::default();
        assert!(!eco.is_capitalized());
        assert!(!eco.is_depreciated());
        assert_eq!(eco.financing(), None);
    }

    #[test]
    fn summary_lists_defined_cost_profiles() {
        let eco = EconomicParameters::new(Financing::Capitalized)
            .with_var_fuel([(2030, 32.0), (2040, 28.0)].into_iter().collect());
        let summary = eco.summary().unwrap_or_default();
        assert!(summary.contains("capitalized annuity"));
        assert!(summary.contains("Fuel(2 years)"));
        assert!(!summary.contains("OM("));
    }
}
