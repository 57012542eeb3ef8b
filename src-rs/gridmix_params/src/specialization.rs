//! Family-specific parameter payloads.
//!
//! Each technology family carries its own specialization payload:
//! ramping characteristics for dispatchable technologies, availability
//! profiles for fatal (must-run) technologies, and charge/discharge
//! characteristics for storage. The descriptor stores the payload opaquely;
//! [`SpecParameters`] combines the three for callers that keep technologies
//! of different families in one collection.

use crate::series::YearSeries;

/// Parameters specific to dispatchable technologies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchParameters {
    ramp_up: f64,
    ramp_down: f64,
    min_load: f64,
}

impl DispatchParameters {
    /// Creates dispatch parameters.
    ///
    /// # Arguments
    ///
    /// * `ramp_up` - Upward ramp rate, as a fraction of capacity per hour
    /// * `ramp_down` - Downward ramp rate, as a fraction of capacity per hour
    /// * `min_load` - Minimum stable load, as a fraction of capacity
    #[must_use]
    pub const fn new(ramp_up: f64, ramp_down: f64, min_load: f64) -> Self {
        Self {
            ramp_up,
            ramp_down,
            min_load,
        }
    }

    /// Returns the upward ramp rate (fraction of capacity per hour).
    #[must_use]
    pub const fn ramp_up(&self) -> f64 {
        self.ramp_up
    }

    /// Returns the downward ramp rate (fraction of capacity per hour).
    #[must_use]
    pub const fn ramp_down(&self) -> f64 {
        self.ramp_down
    }

    /// Returns the minimum stable load (fraction of capacity).
    #[must_use]
    pub const fn min_load(&self) -> f64 {
        self.min_load
    }
}

/// Parameters specific to fatal (must-run, non-dispatchable) technologies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FatalParameters {
    availability: YearSeries,
}

impl FatalParameters {
    /// Creates fatal parameters from a per-year availability (load-factor)
    /// profile.
    #[must_use]
    pub const fn new(availability: YearSeries) -> Self {
        Self { availability }
    }

    /// Returns the per-year availability profile.
    #[must_use]
    pub const fn availability(&self) -> &YearSeries {
        &self.availability
    }
}

/// Parameters specific to storage technologies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorageParameters {
    efficiency: f64,
    duration_hours: f64,
}

impl StorageParameters {
    /// Creates storage parameters.
    ///
    /// # Arguments
    ///
    /// * `efficiency` - Round-trip efficiency, in `(0, 1]`
    /// * `duration_hours` - Hours of discharge at full power
    #[must_use]
    pub const fn new(efficiency: f64, duration_hours: f64) -> Self {
        Self {
            efficiency,
            duration_hours,
        }
    }

    /// Returns the round-trip efficiency.
    #[must_use]
    pub const fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Returns the discharge duration at full power, in hours.
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }
}

/// A specialization payload of any family, for heterogeneous collections.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecParameters {
    /// Payload of a dispatchable technology.
    Dispatch(DispatchParameters),
    /// Payload of a fatal technology.
    Fatal(FatalParameters),
    /// Payload of a storage technology.
    Storage(StorageParameters),
}

impl SpecParameters {
    /// Returns the dispatch payload, if this is one.
    #[must_use]
    pub const fn as_dispatch(&self) -> Option<&DispatchParameters> {
        match self {
            Self::Dispatch(params) => Some(params),
            Self::Fatal(_) | Self::Storage(_) => None,
        }
    }

    /// Returns the fatal payload, if this is one.
    #[must_use]
    pub const fn as_fatal(&self) -> Option<&FatalParameters> {
        match self {
            Self::Fatal(params) => Some(params),
            Self::Dispatch(_) | Self::Storage(_) => None,
        }
    }

    /// Returns the storage payload, if this is one.
    #[must_use]
    pub const fn as_storage(&self) -> Option<&StorageParameters> {
        match self {
            Self::Storage(params) => Some(params),
            Self::Dispatch(_) | Self::Fatal(_) => None,
        }
    }
}

impl From<DispatchParameters> for SpecParameters {
    fn from(params: DispatchParameters) -> Self {
        Self::Dispatch(params)
    }
}

impl From<FatalParameters> for SpecParameters {
    fn from(params: FatalParameters) -> Self {
        Self::Fatal(params)
    }
}

impl From<StorageParameters> for SpecParameters {
    fn from(params: StorageParameters) -> Self {
        Self::Storage(params)
    }
}
