//! Channel Occupancy Monitor Component
//!
//! A process-wide registry that lets independent components expose the
//! current occupancy of their bounded FIFO queues for external inspection,
//! without coordinating with whoever is observing them.
//!
//! # Overview
//!
//! Components register their queues under a composite `(name, suffix)`
//! identity; observers look up occupancy snapshots by identity or take a
//! bulk snapshot of everything registered. Key properties:
//!
//! - **Read-only introspection**: the registry never reads or writes queue
//!   elements, it only asks registered queues for occupancy and capacity
//! - **Concurrent readers**: lookups share a read lock and never block each
//!   other; only registration takes exclusive access
//! - **Atomic registration**: duplicate identities are rejected under the
//!   same write lock that inserts, so races produce exactly one winner
//! - **Permanent entries**: there is no unregister; an identity is claimed
//!   for the process lifetime
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use chanmon::monitor::api::{BoundedFifo, ChannelRegistry};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ChannelRegistry::new();
//!
//! // Producer side: register the work queue at startup
//! let jobs = Arc::new(BoundedFifo::new(10));
//! registry.register("jobs", "", Arc::clone(&jobs))?;
//!
//! // Unrelated producer/consumer code uses the queue directly
//! jobs.push("job-1".to_string())?;
//!
//! // Observer side: snapshot current occupancy
//! if let Some(state) = registry.get("jobs", "") {
//!     println!("jobs: {}/{}", state.length, state.capacity);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod fifo;
mod registry;
mod traits;
mod types;

pub mod api;

pub use error::{MonitorError, MonitorResult};
pub use fifo::BoundedFifo;
pub use registry::ChannelRegistry;
pub use traits::{BoundedQueue, SharedQueue};
pub use types::{ChanState, QueueId};

#[cfg(test)]
mod tests;
