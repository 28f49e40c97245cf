//! ChannelRegistry - named directory of bounded queues
//!
//! The registry owns a single identity-to-queue map guarded by a
//! reader/writer lock. Registration takes exclusive access for the
//! check-and-insert; lookups share the lock and never block each other.

use crate::monitor::error::{MonitorError, MonitorResult};
use crate::monitor::traits::{BoundedQueue, SharedQueue};
use crate::monitor::types::{ChanState, QueueId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe directory of named bounded queues
///
/// The registry maps composite `(name, suffix)` identities to shared queue
/// references and answers occupancy questions about them. It runs no
/// background activity of its own and never blocks beyond its internal
/// lock; queue elements are never read or written through it.
///
/// # Thread Safety
///
/// All operations take `&self` and the registry can be shared across
/// threads via `Arc<ChannelRegistry>`. Lookups proceed concurrently with
/// each other; only registration excludes them, and then only for the
/// duration of an in-memory map insert.
///
/// # Example
///
/// ```rust,no_run
/// use chanmon::monitor::api::{BoundedFifo, ChannelRegistry};
/// use std::sync::Arc;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = ChannelRegistry::new();
///
/// let queue = Arc::new(BoundedFifo::<u64>::new(100));
/// registry.register("ingest", "worker-1", Arc::clone(&queue))?;
///
/// for state in registry.get_all().values() {
///     println!("{}/{} ({})", state.length, state.capacity, state.instance);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ChannelRegistry {
    /// Registered queues keyed by composite identity
    channels: RwLock<HashMap<QueueId, SharedQueue>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Register a queue under a composite `(name, suffix)` identity
    ///
    /// `name` is the logical queue name and is expected to be non-empty;
    /// `suffix` distinguishes instances of the same logical queue and may
    /// be empty. The identity is claimed for the process lifetime: there is
    /// no unregister, and a second registration under the same identity
    /// fails with [`MonitorError::AlreadyRegistered`] without touching the
    /// existing entry.
    ///
    /// The duplicate check and the insert run under one write lock, so
    /// concurrent registrations of the same identity yield exactly one
    /// success.
    ///
    /// The registry holds the queue reference until process exit; callers
    /// keep their own handle for producing and consuming.
    pub fn register<Q>(&self, name: &str, suffix: &str, queue: Arc<Q>) -> MonitorResult<()>
    where
        Q: BoundedQueue + Send + Sync + 'static,
    {
        let id = QueueId::new(name, suffix);

        let mut channels = self.channels.write().unwrap();
        if channels.contains_key(&id) {
            return Err(MonitorError::AlreadyRegistered {
                name: id.display_name(),
            });
        }

        log::debug!("Registering queue '{}' (capacity: {})", id, queue.capacity());

        let queue: SharedQueue = queue;
        channels.insert(id, queue);
        Ok(())
    }

    /// Snapshot one queue's current occupancy
    ///
    /// Looks up the raw `(name, suffix)` pair exactly. `None` means no
    /// queue is registered under that identity, which callers treat as a
    /// normal outcome rather than an error. The snapshot is recomputed on
    /// every call; nothing is cached.
    pub fn get(&self, name: &str, suffix: &str) -> Option<ChanState> {
        let id = QueueId::new(name, suffix);

        let channels = self.channels.read().unwrap();
        channels.get(&id).map(|queue| snapshot(&id, queue.as_ref()))
    }

    /// Snapshot every registered queue in one lock acquisition
    ///
    /// Results are keyed by logical name only. Entries that share a name
    /// but differ in suffix therefore collide, and exactly one of them
    /// survives (map iteration order decides which); the individual
    /// instances stay fully observable through [`ChannelRegistry::get`]
    /// with an explicit suffix. An empty registry yields an empty map.
    pub fn get_all(&self) -> HashMap<String, ChanState> {
        let channels = self.channels.read().unwrap();
        channels
            .iter()
            .map(|(id, queue)| (id.name.clone(), snapshot(id, queue.as_ref())))
            .collect()
    }

    /// Number of registered queues
    pub fn queue_count(&self) -> usize {
        self.channels.read().unwrap().len()
    }
}

/// Compute a fresh occupancy snapshot for one registered queue
fn snapshot(id: &QueueId, queue: &(dyn BoundedQueue + Send + Sync)) -> ChanState {
    ChanState {
        length: queue.len(),
        capacity: queue.capacity(),
        instance: id.suffix.clone(),
    }
}
