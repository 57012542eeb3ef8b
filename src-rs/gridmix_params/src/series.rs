//! Year-indexed value series.
//!
//! Technology parameters are expressed over calendar years: variable-cost
//! profiles, historical capacity, availability factors. [`YearSeries`] is
//! the shared representation for all of them: an insertion-ordered mapping
//! from [`Year`] to a numeric value, so iteration order (and therefore
//! summaries and error reports) is deterministic.

use std::fmt;
use std::ops::Deref;

use indexmap::IndexMap;

/// A calendar year used to index parameter series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    /// Creates a new year.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// Returns the numeric value of this year.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered mapping from years to numeric values.
///
/// `YearSeries` is the common shape of every per-year parameter in gridmix:
/// variable-cost profiles, historical installed capacity, load-factor
/// profiles. An empty series means "not defined for this technology", and
/// the descriptor's consistency checks skip empty series rather than
/// treating them as zero.
///
/// The series dereferences to its underlying [`IndexMap`], so the usual map
/// queries (`len`, `is_empty`, `get`, `values`, iteration) are available
/// directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearSeries(IndexMap<Year, f64>);

impl YearSeries {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts a value for a year, returning the previous value if the year
    /// was already present.
    pub fn insert(&mut self, year: impl Into<Year>, value: f64) -> Option<f64> {
        self.0.insert(year.into(), value)
    }

    /// Returns the value for a year, if defined.
    #[must_use]
    pub fn value_for(&self, year: impl Into<Year>) -> Option<f64> {
        self.0.get(&year.into()).copied()
    }
}

impl Deref for YearSeries {
    type Target = IndexMap<Year, f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<Y: Into<Year>> FromIterator<(Y, f64)> for YearSeries {
    fn from_iter<I: IntoIterator<Item = (Y, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(year, value)| (year.into(), value))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a YearSeries {
    type Item = (&'a Year, &'a f64);
    type IntoIter = indexmap::map::Iter<'a, Year, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_preserves_insertion_order() {
        let mut series = YearSeries::new();
        series.insert(2050, 1.0);
        series.insert(2030, 2.0);
        series.insert(2040, 3.0);

        let years: Vec<i32> = series.keys().map(|year| year.value()).collect();
        assert_eq!(years, vec![2050, 2030, 2040]);
    }

    #[test]
    fn insert_replaces_existing_year() {
        let mut series = YearSeries::new();
        assert_eq!(series.insert(2030, 1.5), None);
        assert_eq!(series.insert(2030, 2.5), Some(1.5));
        assert_eq!(series.value_for(2030), Some(2.5));
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn empty_series_is_empty() {
        let series = YearSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.value_for(2030), None);
    }

    #[test]
    fn from_iterator_accepts_plain_years() {
        let series: YearSeries = [(2030, 1.0), (2031, 2.0)].into_iter().collect();
        assert_eq!(series.value_for(Year::new(2031)), Some(2.0));
    }
}
