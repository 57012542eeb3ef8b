//! Parameter contracts and concrete parameter types for gridmix technologies.
//!
//! This crate defines the narrow contracts through which a technology
//! descriptor consumes its parameter objects, together with the value types
//! those contracts are expressed in and a set of ready-made parameter
//! implementations:
//!
//! - **Value types**: [`Year`] and [`YearSeries`] (an ordered year-to-value
//!   mapping), plus [`CostCategory`] naming the four variable-cost
//!   categories.
//! - **Capability traits**: [`EconomicParams`] and [`TechnicalParams`].
//!   Every method has a default body, so a parameter type declares exactly
//!   the capabilities it supports and inherits permissive defaults for the
//!   rest.
//! - **Concrete parameters**: [`EconomicParameters`],
//!   [`TechnicalParameters`], and the family-specific payloads
//!   ([`DispatchParameters`], [`FatalParameters`], [`StorageParameters`],
//!   combined in [`SpecParameters`]).
//!
//! The descriptor only ever queries these objects; it never mutates them.
//! Sharing one parameter object between several descriptors is supported
//! through the `Rc` implementations of the capability traits.

mod cost;
mod economic;
mod series;
mod specialization;
mod technical;
mod traits;

pub use cost::CostCategory;
pub use economic::{EconomicParameters, Financing};
pub use series::{Year, YearSeries};
pub use specialization::{
    DispatchParameters, FatalParameters, SpecParameters, StorageParameters,
};
pub use technical::TechnicalParameters;
pub use traits::{EconomicParams, TechnicalParams};
