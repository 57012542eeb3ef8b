//! Validated power-generation technology descriptors.
//!
//! A technology descriptor bundles the identity of a technology (its
//! [`Family`], name, and subtype) with three parameter objects: economic,
//! technical, and family-specific. The descriptor validates its
//! configuration at construction time and either exists with all
//! consistency checks holding or never exists at all; there is no
//! invalid-but-alive state.
//!
//! # Consistency checks
//!
//! 1. **Financing mode**: the economic parameters must declare exactly one
//!    of the capitalized-annuity and depreciation representations of
//!    capital cost.
//! 2. **Storage charge costs**: a storage technology's charging segment
//!    (subtype [`CHARGE_SUBTYPE`]) must not carry an all-positive variable
//!    cost profile in any defined cost category, since charging must not
//!    appear as a pure cost-only segment to the dispatch optimization it
//!    feeds.
//!
//! Violations are reported as [`TechnoError`], carrying the failing check
//! and the offending `(family, name, subtype)` triple so that a bad entry
//! in a bulk-loaded technology catalog is traceable.
//!
//! # Example
//!
//! ```rust
//! use gridmix_params::{
//!     DispatchParameters, EconomicParameters, Financing, TechnicalParameters,
//! };
//! use gridmix_techno::{Dispatchable, Family};
//!
//! let eco = EconomicParameters::new(Financing::Capitalized)
//!     .with_var_fuel([(2030, 32.0)].into_iter().collect());
//! let tech = TechnicalParameters::default();
//! let ramping = DispatchParameters::new(0.5, 0.5, 0.2);
//!
//! let nuclear = Dispatchable::new("nuclear", "new", eco, tech, ramping)
//!     .expect("consistent configuration");
//! assert_eq!(nuclear.family(), Family::Dispatchable);
//! ```

mod error;
mod family;
mod techno;
mod variant;

pub use error::{TechnoError, TechnoErrorKind};
pub use family::Family;
pub use techno::{CHARGE_SUBTYPE, Techno};
pub use variant::{Dispatchable, Fatal, Storage};
