//! In-memory implementations of the tracking-engine traits.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use apptrack_core::config::*;
use apptrack_core::errors::{EngineError, EngineResult};
use apptrack_core::event::TypedEvent;
use apptrack_core::{SubjectController, TrackerController, TrackingEngine};
use serde_json::{Map, Value};
use uuid::Uuid;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

// ---- Engine ----

/// One `create_tracker` call that succeeded.
#[derive(Clone)]
pub struct CreatedTracker {
    pub customer_key: String,
    pub namespace: String,
    pub configurations: Vec<Configuration>,
    pub tracker: Arc<RecordingTracker>,
}

impl CreatedTracker {
    pub fn network(&self) -> Option<&NetworkConfiguration> {
        self.configurations.iter().find_map(|c| match c {
            Configuration::Network(n) => Some(n),
            _ => None,
        })
    }

    pub fn tracker_config(&self) -> Option<&TrackerConfiguration> {
        self.configurations.iter().find_map(|c| match c {
            Configuration::Tracker(t) => Some(t),
            _ => None,
        })
    }

    pub fn session(&self) -> Option<&SessionConfiguration> {
        self.configurations.iter().find_map(|c| match c {
            Configuration::Session(s) => Some(s),
            _ => None,
        })
    }

    pub fn emitter(&self) -> Option<&EmitterConfiguration> {
        self.configurations.iter().find_map(|c| match c {
            Configuration::Emitter(e) => Some(e),
            _ => None,
        })
    }

    pub fn subject(&self) -> Option<&SubjectConfiguration> {
        self.configurations.iter().find_map(|c| match c {
            Configuration::Subject(s) => Some(s),
            _ => None,
        })
    }

    pub fn gdpr(&self) -> Option<&GdprConfiguration> {
        self.configurations.iter().find_map(|c| match c {
            Configuration::Gdpr(g) => Some(g),
            _ => None,
        })
    }

    pub fn global_contexts(&self) -> Option<&GlobalContextsConfiguration> {
        self.configurations.iter().find_map(|c| match c {
            Configuration::GlobalContexts(g) => Some(g),
            _ => None,
        })
    }

    pub fn remote(&self) -> Option<&RemoteConfiguration> {
        self.configurations.iter().find_map(|c| match c {
            Configuration::Remote(r) => Some(r),
            _ => None,
        })
    }

    pub fn domains(&self) -> Vec<&'static str> {
        self.configurations.iter().map(Configuration::domain).collect()
    }
}

#[derive(Default)]
struct EngineState {
    created: Vec<CreatedTracker>,
    live: HashMap<String, Arc<RecordingTracker>>,
    removed: Vec<String>,
    client_id: Option<String>,
}

/// Records everything; fails or panics on demand.
#[derive(Default)]
pub struct RecordingEngine {
    state: Mutex<EngineState>,
    fail_next_create: Mutex<Option<String>>,
    panic_on_create: AtomicBool,
    fail_remove: Mutex<HashSet<String>>,
    create_delay: Mutex<Option<Duration>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl RecordingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// The next `create_tracker` call fails with `reason`.
    pub fn fail_next_create(&self, reason: impl Into<String>) {
        *lock(&self.fail_next_create) = Some(reason.into());
    }

    /// Every `create_tracker` call panics.
    pub fn panic_on_create(&self, enabled: bool) {
        self.panic_on_create.store(enabled, Ordering::SeqCst);
    }

    /// `remove_tracker` fails for `namespace`.
    pub fn fail_remove_of(&self, namespace: impl Into<String>) {
        lock(&self.fail_remove).insert(namespace.into());
    }

    /// Sleep inside `create_tracker`, to widen race windows.
    pub fn set_create_delay(&self, delay: Duration) {
        *lock(&self.create_delay) = Some(delay);
    }

    /// Highest number of `create_tracker` calls observed running at once.
    pub fn max_concurrent_creates(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<CreatedTracker> {
        lock(&self.state).created.clone()
    }

    pub fn last_created(&self) -> Option<CreatedTracker> {
        lock(&self.state).created.last().cloned()
    }

    pub fn creation_count(&self) -> usize {
        lock(&self.state).created.len()
    }

    /// The live tracker the engine holds for `namespace`.
    pub fn tracker(&self, namespace: &str) -> Option<Arc<RecordingTracker>> {
        lock(&self.state).live.get(namespace).cloned()
    }

    pub fn removed(&self) -> Vec<String> {
        lock(&self.state).removed.clone()
    }

    pub fn stored_client_id(&self) -> Option<String> {
        lock(&self.state).client_id.clone()
    }
}

impl TrackingEngine for RecordingEngine {
    fn create_tracker(
        &self,
        customer_key: &str,
        namespace: &str,
        configurations: Vec<Configuration>,
    ) -> EngineResult<Arc<dyn TrackerController>> {
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        let result = self.create_inner(customer_key, namespace, configurations);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn remove_tracker(&self, tracker: &dyn TrackerController) -> EngineResult<bool> {
        let namespace = tracker.namespace();
        if lock(&self.fail_remove).contains(namespace) {
            return Err(EngineError::operation(namespace, "removeTracker", "injected failure"));
        }
        let mut state = lock(&self.state);
        let was_live = state.live.remove(namespace).is_some();
        state.removed.push(namespace.to_string());
        Ok(was_live)
    }

    fn set_client_id(&self, client_id: &str) -> EngineResult<bool> {
        lock(&self.state).client_id = Some(client_id.to_string());
        Ok(true)
    }

    fn client_id(&self) -> EngineResult<Option<String>> {
        Ok(lock(&self.state).client_id.clone())
    }
}

impl RecordingEngine {
    fn create_inner(
        &self,
        customer_key: &str,
        namespace: &str,
        configurations: Vec<Configuration>,
    ) -> EngineResult<Arc<dyn TrackerController>> {
        let delay = *lock(&self.create_delay);
        if let Some(delay) = delay {
            std::thread::sleep(delay);
        }
        if self.panic_on_create.load(Ordering::SeqCst) {
            panic!("engine exploded creating '{namespace}'");
        }
        if let Some(reason) = lock(&self.fail_next_create).take() {
            return Err(EngineError::CreationFailed {
                namespace: namespace.to_string(),
                reason,
            });
        }

        let tracker = Arc::new(RecordingTracker::new(namespace));
        let mut state = lock(&self.state);
        state.created.push(CreatedTracker {
            customer_key: customer_key.to_string(),
            namespace: namespace.to_string(),
            configurations,
            tracker: Arc::clone(&tracker),
        });
        state.live.insert(namespace.to_string(), Arc::clone(&tracker));
        Ok(tracker)
    }
}

// ---- Tracker ----

pub struct RecordingTracker {
    namespace: String,
    instance_id: Uuid,
    events: Mutex<Vec<TypedEvent>>,
    custom_events: Mutex<Vec<(String, String)>>,
    tags: Mutex<Map<String, Value>>,
    category_tags: Mutex<HashMap<String, Map<String, Value>>>,
    fail_track: AtomicBool,
    subject: RecordingSubject,
}

impl RecordingTracker {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            instance_id: Uuid::new_v4(),
            events: Mutex::new(Vec::new()),
            custom_events: Mutex::new(Vec::new()),
            tags: Mutex::new(Map::new()),
            category_tags: Mutex::new(HashMap::new()),
            fail_track: AtomicBool::new(false),
            subject: RecordingSubject::default(),
        }
    }

    /// Distinct per tracker instance, even across re-creation of a namespace.
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn events(&self) -> Vec<TypedEvent> {
        lock(&self.events).clone()
    }

    /// `(name, payload_json)` pairs.
    pub fn custom_events(&self) -> Vec<(String, String)> {
        lock(&self.custom_events).clone()
    }

    pub fn tags(&self) -> Map<String, Value> {
        lock(&self.tags).clone()
    }

    pub fn category_tags(&self, category: &str) -> Option<Map<String, Value>> {
        lock(&self.category_tags).get(category).cloned()
    }

    pub fn fail_track(&self, enabled: bool) {
        self.fail_track.store(enabled, Ordering::SeqCst);
    }

    pub fn recording_subject(&self) -> &RecordingSubject {
        &self.subject
    }
}

impl TrackerController for RecordingTracker {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn track(&self, event: TypedEvent) -> EngineResult<()> {
        if self.fail_track.load(Ordering::SeqCst) {
            return Err(EngineError::operation(&self.namespace, "track", "injected failure"));
        }
        lock(&self.events).push(event);
        Ok(())
    }

    fn track_custom_event(&self, name: &str, payload_json: &str) -> EngineResult<()> {
        if self.fail_track.load(Ordering::SeqCst) {
            return Err(EngineError::operation(&self.namespace, "trackCustomEvent", "injected failure"));
        }
        lock(&self.custom_events).push((name.to_string(), payload_json.to_string()));
        Ok(())
    }

    fn set_custom_tags(&self, tags: Map<String, Value>) -> EngineResult<()> {
        lock(&self.tags).extend(tags);
        Ok(())
    }

    fn set_custom_tags_with_category(&self, category: &str, tags: Map<String, Value>) -> EngineResult<()> {
        lock(&self.category_tags)
            .entry(category.to_string())
            .or_default()
            .extend(tags);
        Ok(())
    }

    fn clear_custom_tags(&self, keys: HashSet<String>) -> EngineResult<()> {
        let mut tags = lock(&self.tags);
        for key in &keys {
            tags.remove(key);
        }
        Ok(())
    }

    fn clear_all_custom_tags(&self) -> EngineResult<()> {
        lock(&self.tags).clear();
        lock(&self.category_tags).clear();
        Ok(())
    }

    fn subject(&self) -> &dyn SubjectController {
        &self.subject
    }
}

// ---- Subject ----

/// Current subject attributes as the engine sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectState {
    pub user_id: Option<String>,
    pub network_user_id: Option<String>,
    pub domain_user_id: Option<String>,
    pub useragent: Option<String>,
    pub ip_address: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub screen_resolution: Option<ScreenSize>,
    pub screen_viewport: Option<ScreenSize>,
    pub color_depth: Option<u32>,
}

#[derive(Default)]
pub struct RecordingSubject {
    state: Mutex<SubjectState>,
    failing: Mutex<HashSet<&'static str>>,
    calls: AtomicUsize,
}

impl RecordingSubject {
    pub fn snapshot(&self) -> SubjectState {
        lock(&self.state).clone()
    }

    /// Setter for host key `field` (e.g. `"language"`) fails from now on.
    pub fn fail_on(&self, field: &'static str) {
        lock(&self.failing).insert(field);
    }

    /// Number of setter calls, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn set<T>(&self, field: &'static str, update: impl FnOnce(&mut SubjectState) -> T) -> EngineResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if lock(&self.failing).contains(field) {
            return Err(EngineError::operation("subject", field, "injected failure"));
        }
        update(&mut lock(&self.state));
        Ok(())
    }
}

impl SubjectController for RecordingSubject {
    fn set_user_id(&self, value: Option<&str>) -> EngineResult<()> {
        self.set("userId", |s| s.user_id = value.map(str::to_string))
    }

    fn set_network_user_id(&self, value: Option<&str>) -> EngineResult<()> {
        self.set("networkUserId", |s| s.network_user_id = value.map(str::to_string))
    }

    fn set_domain_user_id(&self, value: Option<&str>) -> EngineResult<()> {
        self.set("domainUserId", |s| s.domain_user_id = value.map(str::to_string))
    }

    fn set_useragent(&self, value: Option<&str>) -> EngineResult<()> {
        self.set("useragent", |s| s.useragent = value.map(str::to_string))
    }

    fn set_ip_address(&self, value: Option<&str>) -> EngineResult<()> {
        self.set("ipAddress", |s| s.ip_address = value.map(str::to_string))
    }

    fn set_timezone(&self, value: Option<&str>) -> EngineResult<()> {
        self.set("timezone", |s| s.timezone = value.map(str::to_string))
    }

    fn set_language(&self, value: Option<&str>) -> EngineResult<()> {
        self.set("language", |s| s.language = value.map(str::to_string))
    }

    fn set_screen_resolution(&self, value: Option<ScreenSize>) -> EngineResult<()> {
        self.set("screenResolution", |s| s.screen_resolution = value)
    }

    fn set_screen_viewport(&self, value: Option<ScreenSize>) -> EngineResult<()> {
        self.set("screenViewport", |s| s.screen_viewport = value)
    }

    fn set_color_depth(&self, value: Option<u32>) -> EngineResult<()> {
        self.set("colorDepth", |s| s.color_depth = value)
    }
}
