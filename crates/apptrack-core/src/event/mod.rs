//! Typed events accepted by a tracker, with their attached contexts.

pub mod commerce;
pub mod consent;
pub mod interaction;
pub mod navigation;
pub mod notification;

pub use commerce::{EcommerceItem, EcommerceTransaction};
pub use consent::{ConsentGranted, ConsentWithdrawn};
pub use interaction::{ButtonClick, CustomEvent, Structured, Timing};
pub use navigation::{DeepLinkReceived, PageView, ScreenView};
pub use notification::{MessageNotification, NotificationAttachment};

use crate::payload::SelfDescribingJson;

/// The twelve event variants a tracker ingests.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelfDescribing(SelfDescribingJson),
    Structured(Structured),
    ScreenView(ScreenView),
    PageView(PageView),
    Timing(Timing),
    ConsentGranted(ConsentGranted),
    ConsentWithdrawn(ConsentWithdrawn),
    EcommerceTransaction(EcommerceTransaction),
    DeepLinkReceived(DeepLinkReceived),
    MessageNotification(MessageNotification),
    ButtonClick(ButtonClick),
    Custom(CustomEvent),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::SelfDescribing(_) => EventKind::SelfDescribing,
            Self::Structured(_) => EventKind::Structured,
            Self::ScreenView(_) => EventKind::ScreenView,
            Self::PageView(_) => EventKind::PageView,
            Self::Timing(_) => EventKind::Timing,
            Self::ConsentGranted(_) => EventKind::ConsentGranted,
            Self::ConsentWithdrawn(_) => EventKind::ConsentWithdrawn,
            Self::EcommerceTransaction(_) => EventKind::EcommerceTransaction,
            Self::DeepLinkReceived(_) => EventKind::DeepLinkReceived,
            Self::MessageNotification(_) => EventKind::MessageNotification,
            Self::ButtonClick(_) => EventKind::ButtonClick,
            Self::Custom(_) => EventKind::Custom,
        }
    }
}

/// Event-kind tag, independent of payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SelfDescribing,
    Structured,
    ScreenView,
    PageView,
    Timing,
    ConsentGranted,
    ConsentWithdrawn,
    EcommerceTransaction,
    DeepLinkReceived,
    MessageNotification,
    ButtonClick,
    Custom,
}

impl EventKind {
    pub const ALL: [EventKind; 12] = [
        Self::SelfDescribing,
        Self::Structured,
        Self::ScreenView,
        Self::PageView,
        Self::Timing,
        Self::ConsentGranted,
        Self::ConsentWithdrawn,
        Self::EcommerceTransaction,
        Self::DeepLinkReceived,
        Self::MessageNotification,
        Self::ButtonClick,
        Self::Custom,
    ];

    /// ButtonClick and Custom events never carry contexts.
    pub fn accepts_contexts(self) -> bool {
        !matches!(self, Self::ButtonClick | Self::Custom)
    }

    /// Short name used in logs and translation errors.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelfDescribing => "selfDescribing",
            Self::Structured => "structured",
            Self::ScreenView => "screenView",
            Self::PageView => "pageView",
            Self::Timing => "timing",
            Self::ConsentGranted => "consentGranted",
            Self::ConsentWithdrawn => "consentWithdrawn",
            Self::EcommerceTransaction => "ecommerceTransaction",
            Self::DeepLinkReceived => "deepLinkReceived",
            Self::MessageNotification => "messageNotification",
            Self::ButtonClick => "buttonClick",
            Self::Custom => "custom",
        }
    }

    /// Host entry-point name that submits this kind.
    pub fn method_name(self) -> &'static str {
        match self {
            Self::SelfDescribing => "trackSelfDescribingEvent",
            Self::Structured => "trackStructuredEvent",
            Self::ScreenView => "trackScreenViewEvent",
            Self::PageView => "trackPageView",
            Self::Timing => "trackTimingEvent",
            Self::ConsentGranted => "trackConsentGrantedEvent",
            Self::ConsentWithdrawn => "trackConsentWithdrawnEvent",
            Self::EcommerceTransaction => "trackEcommerceTransactionEvent",
            Self::DeepLinkReceived => "trackDeepLinkReceivedEvent",
            Self::MessageNotification => "trackMessageNotificationEvent",
            Self::ButtonClick => "trackClickEvent",
            Self::Custom => "trackCustomEvent",
        }
    }

    pub fn from_method_name(method: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.method_name() == method)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event plus its ordered contexts, ready for `TrackerController::track`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedEvent {
    pub event: Event,
    pub contexts: Vec<SelfDescribingJson>,
}

impl TypedEvent {
    /// Attach `contexts` in order. Kinds that take no contexts drop them.
    pub fn new(event: Event, contexts: Vec<SelfDescribingJson>) -> Self {
        let kind = event.kind();
        let contexts = if kind.accepts_contexts() {
            contexts
        } else {
            if !contexts.is_empty() {
                tracing::debug!(kind = %kind, dropped = contexts.len(), "event kind takes no contexts");
            }
            Vec::new()
        };
        Self { event, contexts }
    }

    pub fn without_contexts(event: Event) -> Self {
        Self {
            event,
            contexts: Vec::new(),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }
}
