//! Tracker registry behaviour under concurrent callers.

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use apptrack_bridge::{Bridge, TrackerRegistry};
use apptrack_core::errors::{EngineError, LookupError};
use apptrack_core::TrackerController;
use serde_json::json;
use test_fixtures::{RecordingEngine, RecordingTracker};

fn recording(namespace: &str) -> Arc<dyn TrackerController> {
    Arc::new(RecordingTracker::new(namespace))
}

#[test]
fn empty_registry_has_no_default() {
    let registry = TrackerRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.get(None).is_none());
    assert_eq!(registry.resolve(None).err(), Some(LookupError::NoDefaultTracker));
    assert_eq!(
        registry.resolve(Some("App")).err(),
        Some(LookupError::TrackerNotFound {
            namespace: "App".to_string()
        })
    );
}

#[test]
fn failed_creation_registers_nothing() {
    let registry = TrackerRegistry::new();
    let result = registry.create_with("App", || {
        Err(EngineError::CreationFailed {
            namespace: "App".to_string(),
            reason: "no storage".to_string(),
        })
    });
    assert!(result.is_err());
    assert!(registry.is_empty());
    assert!(registry.default_namespace().is_none());
}

#[test]
fn removing_a_non_default_tracker_keeps_the_default() {
    let registry = TrackerRegistry::new();
    registry.create_with("A", || Ok(recording("A"))).unwrap();
    registry.create_with("B", || Ok(recording("B"))).unwrap();

    assert!(registry.remove_with(Some("A"), |_| Ok(true)).unwrap());
    assert_eq!(registry.default_namespace().as_deref(), Some("B"));
    assert_eq!(registry.get(None).unwrap().namespace(), "B");
}

#[test]
fn concurrent_creates_of_distinct_namespaces_all_register() {
    let engine = RecordingEngine::new();
    let bridge = Arc::new(Bridge::with_defaults(engine.clone()));
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let bridge = Arc::clone(&bridge);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                bridge.create_tracker(&json!({ "appName": format!("app-{i}"), "customerKey": "k" }))
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(bridge.registry().len(), threads);
    assert_eq!(engine.creation_count(), threads);
    let default = bridge.registry().default_namespace().unwrap();
    assert!(bridge.registry().namespaces().contains(&default));
}

#[test]
fn creates_never_overlap_inside_the_engine() {
    let engine = RecordingEngine::new();
    engine.set_create_delay(Duration::from_millis(20));
    let bridge = Arc::new(Bridge::with_defaults(engine.clone()));
    let threads = 4;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let bridge = Arc::clone(&bridge);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                bridge.create_tracker(&json!({ "appName": "Shared", "customerKey": "k" }))
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(engine.max_concurrent_creates(), 1);
    assert_eq!(engine.creation_count(), threads);
    assert_eq!(bridge.registry().namespaces(), ["Shared"]);

    // The registered tracker is the one the engine created last.
    let live = engine.tracker("Shared").unwrap();
    let registered = bridge.registry().get(Some("Shared")).unwrap();
    assert_eq!(
        Arc::as_ptr(&registered) as *const (),
        Arc::as_ptr(&live) as *const ()
    );
}

#[test]
fn resolves_during_creation_see_whole_trackers_only() {
    let engine = RecordingEngine::new();
    let bridge = Arc::new(Bridge::with_defaults(engine.clone()));
    bridge
        .create_tracker(&json!({ "appName": "Base", "customerKey": "k" }))
        .unwrap();
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let bridge = Arc::clone(&bridge);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..50 {
                bridge
                    .create_tracker(&json!({ "appName": format!("w-{i}"), "customerKey": "k" }))
                    .unwrap();
            }
        })
    };
    let reader = {
        let bridge = Arc::clone(&bridge);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..200 {
                let tracker = bridge.registry().get(None).unwrap();
                let namespace = tracker.namespace().to_string();
                assert!(namespace == "Base" || namespace.starts_with("w-"));
                bridge
                    .track_page_view(&json!({
                        "tracker": namespace,
                        "eventData": { "pageUrl": "https://x" }
                    }))
                    .unwrap();
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(bridge.registry().len(), 51);
    let tracked: usize = bridge
        .registry()
        .namespaces()
        .iter()
        .map(|ns| engine.tracker(ns).unwrap().events().len())
        .sum();
    assert_eq!(tracked, 200);
}
