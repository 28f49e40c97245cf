//! Type definitions for the channel monitor
//!
//! This module contains the core data structures used for queue identity
//! and occupancy snapshots.

use std::fmt;

/// Composite identity for a registered queue
///
/// `name` is the logical queue name; `suffix` distinguishes multiple
/// instances of the same logical queue (per-worker, per-shard). Two
/// identities are equal only when both fields match exactly, and the empty
/// suffix is a valid value distinct from any non-empty one. An identity is
/// immutable once an entry is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueueId {
    /// Logical queue name
    pub name: String,
    /// Instance suffix, possibly empty
    pub suffix: String,
}

impl QueueId {
    pub fn new(name: &str, suffix: &str) -> Self {
        Self {
            name: name.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// Name used in messages: `name-suffix` when a suffix is set
    ///
    /// Cosmetic only; lookups always use the raw `(name, suffix)` pair.
    pub fn display_name(&self) -> String {
        if self.suffix.is_empty() {
            self.name.clone()
        } else {
            format!("{}-{}", self.name, self.suffix)
        }
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Occupancy snapshot for one queue at the instant of the call
///
/// Snapshots are recomputed on every lookup and are not live-linked to the
/// queue they describe. The serialized field names (`length`, `capacity`,
/// `instance`) are relied upon by external dashboards and must not change.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChanState {
    /// Number of elements currently in the queue
    pub length: usize,
    /// Maximum number of elements the queue can hold
    pub capacity: usize,
    /// Instance suffix the queue was registered under
    pub instance: String,
}
