use std::collections::HashMap;

use crate::payload::SelfDescribingJson;

/// A static set of contexts attached to every event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalContext {
    pub static_contexts: Vec<SelfDescribingJson>,
}

impl GlobalContext {
    pub fn new(static_contexts: Vec<SelfDescribingJson>) -> Self {
        Self { static_contexts }
    }
}

/// Global-context generators keyed by tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalContextsConfiguration {
    generators: HashMap<String, GlobalContext>,
}

impl GlobalContextsConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under `tag`. The first registration of a tag wins;
    /// returns `false` and leaves the existing entry when the tag is taken.
    pub fn add(&mut self, tag: impl Into<String>, context: GlobalContext) -> bool {
        let tag = tag.into();
        if self.generators.contains_key(&tag) {
            tracing::debug!(tag = %tag, "duplicate global context tag ignored");
            return false;
        }
        self.generators.insert(tag, context);
        true
    }

    pub fn get(&self, tag: &str) -> Option<&GlobalContext> {
        self.generators.get(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
