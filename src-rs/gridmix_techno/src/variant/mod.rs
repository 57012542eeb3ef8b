//! Family-fixed variants of the technology descriptor.
//!
//! Each variant is a thin newtype over [`Techno`](crate::Techno) that fixes
//! the family tag at construction and names the specialization payload
//! accessors after its family ("dispatch parameters", "fatal parameters",
//! "storage parameters") for readability. No variant adds checks of its
//! own: everything is validated by the base constructor, including the
//! storage-charge cost check, which the base applies by inspecting the
//! family and subtype.
//!
//! Variants dereference to the base descriptor for the read surface. The
//! base mutators that could move a descriptor out of the variant's family
//! are reachable through [`into_techno`](Dispatchable::into_techno), which
//! gives up the family-fixed wrapper.

mod dispatchable;
mod fatal;
mod storage;

pub use dispatchable::Dispatchable;
pub use fatal::Fatal;
pub use storage::Storage;
