//! Concrete technical parameters.

use crate::{series::YearSeries, traits::TechnicalParams};

/// Technical parameters of a technology: historical data series.
///
/// The descriptor stores these without interpretation; they feed
/// downstream reporting (historical installed capacity and production by
/// year).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TechnicalParameters {
    hist_capacity: YearSeries,
    hist_production: YearSeries,
}

impl TechnicalParameters {
    /// Creates technical parameters from historical capacity and production
    /// series.
    #[must_use]
    pub const fn new(hist_capacity: YearSeries, hist_production: YearSeries) -> Self {
        Self {
            hist_capacity,
            hist_production,
        }
    }

    /// Returns the historical installed-capacity series.
    #[must_use]
    pub const fn hist_capacity(&self) -> &YearSeries {
        &self.hist_capacity
    }

    /// Returns the historical production series.
    #[must_use]
    pub const fn hist_production(&self) -> &YearSeries {
        &self.hist_production
    }
}

impl TechnicalParams for TechnicalParameters {
    fn summary(&self) -> Option<String> {
        Some(format!(
            "history: capacity over {} years, production over {} years",
            self.hist_capacity.len(),
            self.hist_production.len()
        ))
    }
}
