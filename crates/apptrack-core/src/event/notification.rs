use crate::config::enums::Trigger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAttachment {
    pub identifier: String,
    pub attachment_type: String,
    pub url: String,
}

/// A push or local notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageNotification {
    pub title: String,
    pub body: String,
    pub trigger: Trigger,
    pub action: Option<String>,
    pub attachments: Vec<NotificationAttachment>,
    pub body_loc_args: Vec<String>,
    pub body_loc_key: Option<String>,
    pub category: Option<String>,
    pub content_available: Option<bool>,
    pub group: Option<String>,
    pub icon: Option<String>,
    pub notification_count: Option<i64>,
    pub notification_timestamp: Option<String>,
    pub sound: Option<String>,
    pub subtitle: Option<String>,
    pub tag: Option<String>,
    pub thread_identifier: Option<String>,
    pub title_loc_args: Vec<String>,
    pub title_loc_key: Option<String>,
}

impl MessageNotification {
    pub fn new(title: impl Into<String>, body: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            trigger,
            action: None,
            attachments: Vec::new(),
            body_loc_args: Vec::new(),
            body_loc_key: None,
            category: None,
            content_available: None,
            group: None,
            icon: None,
            notification_count: None,
            notification_timestamp: None,
            sound: None,
            subtitle: None,
            tag: None,
            thread_identifier: None,
            title_loc_args: Vec::new(),
            title_loc_key: None,
        }
    }
}
