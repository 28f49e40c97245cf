//! Capability trait for queues that can be monitored
//!
//! Registration is constrained to types that expose occupancy and capacity
//! queries, so only genuine bounded FIFO containers can enter the registry.
//! The constraint is enforced at compile time at the registration call site.

use std::sync::Arc;

/// Capability required of a queue before it can be registered
///
/// Both queries must be non-blocking and O(1); the registry calls them
/// while holding its read lock.
pub trait BoundedQueue {
    /// Number of elements currently held
    fn len(&self) -> usize;

    /// Fixed maximum number of elements
    fn capacity(&self) -> usize;

    /// True when no elements are held
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when occupancy has reached capacity
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Shared reference to a registered queue
///
/// The registry holds one of these per entry for the process lifetime. It
/// never touches queue elements through it, only the occupancy queries.
pub type SharedQueue = Arc<dyn BoundedQueue + Send + Sync>;

impl<T> BoundedQueue for tokio::sync::mpsc::Sender<T> {
    fn len(&self) -> usize {
        // tokio reports free permits via the inherent capacity();
        // occupancy is the remainder
        self.max_capacity() - self.capacity()
    }

    fn capacity(&self) -> usize {
        self.max_capacity()
    }
}
