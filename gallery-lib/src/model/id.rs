//! Record identifiers

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Identifier of a record in the remote dataset.
///
/// Selection state is keyed by this type; it carries no ordering semantics
/// beyond making sorted snapshots possible for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Creates an identifier from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record that can be addressed by a [`RecordId`].
///
/// The selection manager only ever looks at identifiers, so any row type
/// that implements this trait can be paged and selected.
pub trait Identified {
    /// Returns the record's identifier.
    fn id(&self) -> RecordId;
}

impl Identified for RecordId {
    fn id(&self) -> RecordId {
        *self
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> RecordId {
        (**self).id()
    }
}
