//! Transaction model of the connector.
//!
//! Table-format snapshots give read-committed isolation and nothing stronger.
//! There is no per-transaction state, so every transaction shares the same
//! zero-sized [`TransactionHandle`].

use std::fmt::{Display, Formatter, Result};

/// Isolation levels the host engine may request, ordered from weakest to
/// strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl IsolationLevel {
    /// Whether a connector offering `self` satisfies a request for `requested`.
    pub fn meets_requirement_of(self, requested: IsolationLevel) -> bool {
        self >= requested
    }
}

impl Display for IsolationLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(match self {
            IsolationLevel::ReadUncommitted => "READ UNCOMMITTED",
            IsolationLevel::ReadCommitted => "READ COMMITTED",
            IsolationLevel::RepeatableRead => "REPEATABLE READ",
            IsolationLevel::Serializable => "SERIALIZABLE",
        })
    }
}

/// Marker for an open transaction. All handles are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransactionHandle;
