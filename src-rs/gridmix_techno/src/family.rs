//! Technology families.

use std::fmt;

/// The top-level category of a technology.
///
/// Every descriptor belongs to exactly one family, fixed by the variant it
/// was constructed through. The family drives which specialization payload
/// a technology carries and which consistency checks apply (the
/// storage-charge cost check only runs for [`Family::Storage`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Technologies whose output is set by the dispatch (nuclear, gas, ...).
    Dispatchable,
    /// Must-run technologies whose output follows an exogenous profile
    /// (wind, solar, run-of-river hydro, ...).
    Fatal,
    /// Storage technologies (batteries, pumped hydro, ...), split into
    /// charge and discharge segments.
    Storage,
}

impl Family {
    /// Returns the catalog name of this family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dispatchable => "dispatchable",
            Self::Fatal => "fatal",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
