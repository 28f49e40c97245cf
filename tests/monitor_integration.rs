//! Channel monitor integration tests
//!
//! End-to-end coverage of the registry as an external consumer sees it:
//! registration, point lookup, bulk snapshot, and the tokio adapter,
//! all through the public API.

use chanmon::monitor::api::{BoundedFifo, ChanState, ChannelRegistry, MonitorError};
use std::sync::Arc;

#[test]
fn test_end_to_end_occupancy_observation() {
    let registry = ChannelRegistry::new();

    let jobs = Arc::new(BoundedFifo::new(10));
    registry
        .register("jobs", "", Arc::clone(&jobs))
        .expect("first registration succeeds");

    // Producer code pushes directly; the registry is never involved
    for i in 0..3 {
        jobs.push(format!("job-{}", i)).unwrap();
    }

    let state = registry.get("jobs", "").expect("jobs queue registered");
    assert_eq!(
        state,
        ChanState {
            length: 3,
            capacity: 10,
            instance: "".to_string(),
        }
    );
}

#[test]
fn test_instances_with_shared_logical_name() {
    let registry = ChannelRegistry::new();

    let worker_a = Arc::new(BoundedFifo::new(5));
    let worker_b = Arc::new(BoundedFifo::new(5));
    registry.register("jobs", "a", Arc::clone(&worker_a)).unwrap();
    registry.register("jobs", "b", Arc::clone(&worker_b)).unwrap();

    for i in 0..2 {
        worker_a.push(i).unwrap();
    }
    for i in 0..4 {
        worker_b.push(i).unwrap();
    }

    // Point lookups see each instance
    assert_eq!(registry.get("jobs", "a").unwrap().length, 2);
    assert_eq!(registry.get("jobs", "b").unwrap().length, 4);

    // The bulk snapshot keys by logical name, so one instance survives
    let states = registry.get_all();
    assert_eq!(states.len(), 1);
    let survivor = &states["jobs"];
    assert!(survivor.instance == "a" || survivor.instance == "b");
}

#[test]
fn test_duplicate_registration_is_reported_not_applied() {
    let registry = ChannelRegistry::new();

    registry
        .register("events", "ingest", Arc::new(BoundedFifo::<u8>::new(32)))
        .unwrap();

    let err = registry
        .register("events", "ingest", Arc::new(BoundedFifo::<u8>::new(64)))
        .unwrap_err();
    assert!(matches!(err, MonitorError::AlreadyRegistered { .. }));
    assert_eq!(err.to_string(), "Queue already registered: events-ingest");

    // The registry still serves the original queue
    assert_eq!(registry.get("events", "ingest").unwrap().capacity, 32);
}

#[tokio::test]
async fn test_registry_observes_tokio_channel() {
    let registry = ChannelRegistry::new();
    let (tx, mut rx) = tokio::sync::mpsc::channel::<String>(8);

    registry.register("requests", "", Arc::new(tx.clone())).unwrap();

    tx.send("req-1".to_string()).await.unwrap();
    tx.send("req-2".to_string()).await.unwrap();
    tx.send("req-3".to_string()).await.unwrap();

    let state = registry.get("requests", "").expect("channel registered");
    assert_eq!(state.length, 3);
    assert_eq!(state.capacity, 8);

    rx.recv().await.unwrap();
    assert_eq!(registry.get("requests", "").unwrap().length, 2);
}
