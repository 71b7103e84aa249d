//! Event bindings: one per event kind, all funnelled through [`Bridge::track`].

use apptrack_core::errors::TranslationError;
use apptrack_core::event::{Event, EventKind, TypedEvent};
use serde_json::Value;

use crate::bridge::Bridge;
use crate::conversions::error_codes::BridgeOutcome;
use crate::conversions::event_types::encode_event;
use crate::conversions::input::Input;

impl Bridge {
    /// Resolve the target tracker, encode the event, hand it over.
    ///
    /// Arguments are `{ tracker, eventData, contexts? }`, except custom events
    /// which take `{ tracker, eventName, eventData }`. The tracker is resolved
    /// before anything is encoded.
    pub fn track(&self, kind: EventKind, args: &Value) -> BridgeOutcome {
        let method = kind.method_name();
        self.call(method, || {
            let input = Input::from_value(method, args)?;
            let tracker = self.target(input)?;

            let typed = match kind {
                EventKind::Custom => encode_event(kind, args, None)?,
                _ => {
                    let data = input
                        .raw("eventData")
                        .ok_or_else(|| TranslationError::missing(method, "eventData"))?;
                    encode_event(kind, data, input.raw("contexts"))?
                }
            };

            tracing::debug!(namespace = tracker.namespace(), kind = %kind, contexts = typed.contexts.len(), "tracking event");
            match typed {
                TypedEvent {
                    event: Event::Custom(custom),
                    ..
                } => tracker.track_custom_event(&custom.name, &custom.payload_json)?,
                other => tracker.track(other)?,
            }
            Ok(Value::Bool(true))
        })
    }

    pub fn track_self_describing_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::SelfDescribing, args)
    }

    pub fn track_structured_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::Structured, args)
    }

    pub fn track_screen_view_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::ScreenView, args)
    }

    pub fn track_page_view(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::PageView, args)
    }

    pub fn track_timing_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::Timing, args)
    }

    pub fn track_consent_granted_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::ConsentGranted, args)
    }

    pub fn track_consent_withdrawn_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::ConsentWithdrawn, args)
    }

    pub fn track_ecommerce_transaction_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::EcommerceTransaction, args)
    }

    pub fn track_deep_link_received_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::DeepLinkReceived, args)
    }

    pub fn track_message_notification_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::MessageNotification, args)
    }

    /// `{ tracker, eventData }`; click attributes carry no contexts.
    pub fn track_click_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::ButtonClick, args)
    }

    pub fn track_custom_event(&self, args: &Value) -> BridgeOutcome {
        self.track(EventKind::Custom, args)
    }
}
