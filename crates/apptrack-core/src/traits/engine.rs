use std::sync::Arc;

use super::tracker::TrackerController;
use crate::config::Configuration;
use crate::errors::EngineResult;

/// Tracker factory and process-level engine state.
pub trait TrackingEngine: Send + Sync {
    /// Materialize a tracker from the supplied configuration set.
    ///
    /// Either every domain is applied and a handle is returned, or an error is
    /// returned and no tracker exists.
    fn create_tracker(
        &self,
        customer_key: &str,
        namespace: &str,
        configurations: Vec<Configuration>,
    ) -> EngineResult<Arc<dyn TrackerController>>;

    /// Detach a tracker. `Ok(false)` when the engine no longer knew it.
    fn remove_tracker(&self, tracker: &dyn TrackerController) -> EngineResult<bool>;

    fn set_client_id(&self, client_id: &str) -> EngineResult<bool>;

    fn client_id(&self) -> EngineResult<Option<String>>;
}
