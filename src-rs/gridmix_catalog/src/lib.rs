//! In-memory technology catalogs.
//!
//! A [`Catalog`] is an ordered registry mapping a [`TechnoId`] to a
//! validated technology descriptor. Catalogs own their descriptors and
//! release them when dropped; descriptors themselves have no teardown.
//!
//! Descriptor construction fails per technology, not per catalog:
//! [`Catalog::from_entries`] builds every entry of a batch, collects the
//! per-entry [`CatalogError`]s into a [`CatalogErrorMap`], and still
//! returns the partial catalog of the entries that validated, so one bad
//! catalog line never hides the rest of the load.
//!
//! # Example
//!
//! ```rust
//! use gridmix_catalog::{Catalog, CatalogEntry, TechnoId};
//! use gridmix_params::{
//!     DispatchParameters, EconomicParameters, Financing, SpecParameters,
//!     TechnicalParameters,
//! };
//! use gridmix_techno::Family;
//!
//! let entries = vec![
//!     CatalogEntry::new(
//!         TechnoId::from_parts("nuclear", "new"),
//!         Family::Dispatchable,
//!         "nuclear",
//!         "new",
//!         EconomicParameters::new(Financing::Capitalized),
//!         TechnicalParameters::default(),
//!         SpecParameters::Dispatch(DispatchParameters::new(0.5, 0.5, 0.2)),
//!     ),
//! ];
//!
//! let catalog = Catalog::from_entries(entries).expect("every entry validates");
//! assert_eq!(catalog.len(), 1);
//! ```

mod catalog;
mod entry;
mod error;
mod id;

pub use catalog::Catalog;
pub use entry::CatalogEntry;
pub use error::{CatalogError, CatalogErrorMap};
pub use id::TechnoId;
