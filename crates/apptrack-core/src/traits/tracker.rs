use std::collections::HashSet;

use serde_json::{Map, Value};

use super::subject::SubjectController;
use crate::errors::EngineResult;
use crate::event::TypedEvent;

/// A live tracker instance.
pub trait TrackerController: Send + Sync {
    fn namespace(&self) -> &str;

    /// Hand the event to the engine. Ownership passes with it.
    fn track(&self, event: TypedEvent) -> EngineResult<()>;

    /// Submit pre-encoded JSON text under `name`.
    fn track_custom_event(&self, name: &str, payload_json: &str) -> EngineResult<()>;

    fn set_custom_tags(&self, tags: Map<String, Value>) -> EngineResult<()>;

    fn set_custom_tags_with_category(
        &self,
        category: &str,
        tags: Map<String, Value>,
    ) -> EngineResult<()>;

    fn clear_custom_tags(&self, keys: HashSet<String>) -> EngineResult<()>;

    fn clear_all_custom_tags(&self) -> EngineResult<()>;

    fn subject(&self) -> &dyn SubjectController;
}
