//! Tracker Registry: namespace → live tracker.
//!
//! One `RwLock` guards the map and the default namespace together.
//! Structural changes (create, remove) take the write lock for the whole
//! engine call, so two creates of the same namespace cannot interleave and a
//! resolve never observes a half-registered tracker. Resolves share the read
//! lock. The map is only mutated after the engine call succeeds, which keeps
//! it consistent even if a lock is poisoned by a panicking engine.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use apptrack_core::errors::{BridgeResult, EngineResult, LookupError};
use apptrack_core::TrackerController;

#[derive(Default)]
struct RegistryState {
    trackers: HashMap<String, Arc<dyn TrackerController>>,
    /// Namespace of the most recently created tracker.
    default_namespace: Option<String>,
}

#[derive(Default)]
pub struct TrackerRegistry {
    state: RwLock<RegistryState>,
}

impl TrackerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create (or replace) the tracker under `namespace` and make it the default.
    ///
    /// `create` runs under the write lock. On failure nothing is registered
    /// and any previous tracker for the namespace stays in place.
    pub fn create_with<F>(&self, namespace: &str, create: F) -> EngineResult<Arc<dyn TrackerController>>
    where
        F: FnOnce() -> EngineResult<Arc<dyn TrackerController>>,
    {
        let mut state = self.write();
        let tracker = create()?;
        let replaced = state
            .trackers
            .insert(namespace.to_string(), Arc::clone(&tracker))
            .is_some();
        state.default_namespace = Some(namespace.to_string());
        tracing::info!(namespace, replaced, "tracker registered");
        Ok(tracker)
    }

    /// `None` resolves to the default tracker; otherwise an exact match.
    pub fn get(&self, namespace: Option<&str>) -> Option<Arc<dyn TrackerController>> {
        let state = self.read();
        let key = match namespace {
            Some(ns) => ns,
            None => state.default_namespace.as_deref()?,
        };
        state.trackers.get(key).cloned()
    }

    /// Like [`get`](Self::get) but a miss is a [`LookupError`].
    pub fn resolve(&self, namespace: Option<&str>) -> Result<Arc<dyn TrackerController>, LookupError> {
        self.get(namespace)
            .ok_or_else(|| LookupError::for_namespace(namespace))
    }

    /// Detach the tracker under `namespace` (or the default).
    ///
    /// `detach` is the engine-side removal; the entry is erased only when it
    /// succeeds. Removing the default tracker leaves no default.
    pub fn remove_with<F>(&self, namespace: Option<&str>, detach: F) -> BridgeResult<bool>
    where
        F: FnOnce(&dyn TrackerController) -> EngineResult<bool>,
    {
        let mut state = self.write();
        let key = match namespace {
            Some(ns) => ns.to_string(),
            None => state
                .default_namespace
                .clone()
                .ok_or(LookupError::NoDefaultTracker)?,
        };
        let tracker = state
            .trackers
            .get(&key)
            .cloned()
            .ok_or_else(|| LookupError::for_namespace(Some(&key)))?;

        let detached = detach(tracker.as_ref())?;
        state.trackers.remove(&key);
        if state.default_namespace.as_deref() == Some(key.as_str()) {
            state.default_namespace = None;
        }
        tracing::info!(namespace = %key, detached, "tracker removed");
        Ok(detached)
    }

    /// Detach every tracker. Trackers the engine fails to detach stay
    /// registered and the first failure is returned.
    pub fn remove_all_with<F>(&self, mut detach: F) -> EngineResult<usize>
    where
        F: FnMut(&dyn TrackerController) -> EngineResult<bool>,
    {
        let mut state = self.write();
        let mut first_error = None;
        let mut removed = Vec::new();
        for (namespace, tracker) in &state.trackers {
            match detach(tracker.as_ref()) {
                Ok(_) => removed.push(namespace.clone()),
                Err(e) => {
                    tracing::warn!(namespace = %namespace, error = %e, "tracker could not be detached");
                    first_error.get_or_insert(e);
                }
            }
        }
        for namespace in &removed {
            state.trackers.remove(namespace);
        }
        if state
            .default_namespace
            .as_ref()
            .is_some_and(|ns| !state.trackers.contains_key(ns))
        {
            state.default_namespace = None;
        }
        tracing::info!(removed = removed.len(), "trackers removed");
        match first_error {
            Some(e) => Err(e),
            None => Ok(removed.len()),
        }
    }

    pub fn default_namespace(&self) -> Option<String> {
        self.read().default_namespace.clone()
    }

    /// Registered namespaces, sorted.
    pub fn namespaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().trackers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
