//! Public API for the channel monitor
//!
//! This module provides the complete public API for the channel occupancy
//! registry. External modules should import from here rather than directly
//! from internal modules.

use std::sync::{Arc, LazyLock};

// Registry and snapshot types
pub use crate::monitor::registry::ChannelRegistry;
pub use crate::monitor::types::{ChanState, QueueId};

// Queue capability and first-party implementation
pub use crate::monitor::fifo::BoundedFifo;
pub use crate::monitor::traits::{BoundedQueue, SharedQueue};

// Error handling
pub use crate::monitor::error::{MonitorError, MonitorResult};

/// Global monitor service instance
static MONITOR_SERVICE: LazyLock<Arc<ChannelRegistry>> = LazyLock::new(|| {
    log::trace!("Initializing monitor service");
    Arc::new(ChannelRegistry::new())
});

/// Access the process-wide channel registry
///
/// Returns the shared default registry that components use to expose their
/// queues at startup. Each call returns the same instance. Callers that
/// need isolation (tests, embedded use) should construct their own
/// [`ChannelRegistry`] and pass it by reference instead.
///
/// # Examples
/// ```no_run
/// # use chanmon::monitor::api::{get_monitor_service, BoundedFifo};
/// # use std::sync::Arc;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = get_monitor_service();
/// let outbox = Arc::new(BoundedFifo::<String>::new(64));
/// registry.register("outbox", "", Arc::clone(&outbox))?;
/// # Ok(())
/// # }
/// ```
pub fn get_monitor_service() -> Arc<ChannelRegistry> {
    Arc::clone(&MONITOR_SERVICE)
}
