//! Custom tag bindings.

use std::collections::HashSet;

use apptrack_core::errors::TranslationError;
use serde_json::Value;

use crate::bridge::Bridge;
use crate::conversions::error_codes::BridgeOutcome;
use crate::conversions::input::Input;

impl Bridge {
    /// `{ tracker, tags }`.
    pub fn set_custom_tags(&self, args: &Value) -> BridgeOutcome {
        self.call("setCustomTags", || {
            let input = Input::from_value("setCustomTags", args)?;
            let tracker = self.target(input)?;
            let tags = input
                .owned_map("tags")?
                .ok_or_else(|| TranslationError::missing("setCustomTags", "tags"))?;
            tracker.set_custom_tags(tags)?;
            Ok(Value::Bool(true))
        })
    }

    /// `{ tracker, category, tags }`.
    pub fn set_custom_tags_with_category(&self, args: &Value) -> BridgeOutcome {
        self.call("setCustomTagsWithCategory", || {
            let input = Input::from_value("setCustomTagsWithCategory", args)?;
            let tracker = self.target(input)?;
            let category = input.required_str("category")?;
            let tags = input
                .owned_map("tags")?
                .ok_or_else(|| TranslationError::missing("setCustomTagsWithCategory", "tags"))?;
            tracker.set_custom_tags_with_category(category, tags)?;
            Ok(Value::Bool(true))
        })
    }

    /// `{ tracker, tagKeys }`.
    pub fn clear_custom_tags(&self, args: &Value) -> BridgeOutcome {
        self.call("clearCustomTags", || {
            let input = Input::from_value("clearCustomTags", args)?;
            let tracker = self.target(input)?;
            if !input.has_value("tagKeys") {
                return Err(TranslationError::missing("clearCustomTags", "tagKeys").into());
            }
            let keys: HashSet<String> = input.string_list("tagKeys")?.into_iter().collect();
            tracker.clear_custom_tags(keys)?;
            Ok(Value::Bool(true))
        })
    }

    /// `{ tracker }`.
    pub fn clear_all_custom_tags(&self, args: &Value) -> BridgeOutcome {
        self.call("clearAllCustomTags", || {
            let input = Input::from_value("clearAllCustomTags", args)?;
            let tracker = self.target(input)?;
            tracker.clear_all_custom_tags()?;
            Ok(Value::Bool(true))
        })
    }
}
