//! Subject (user and device identity) record.
//!
//! Each field is tri-state so that "key absent" and "key present with null"
//! stay distinguishable all the way to the engine.

use crate::errors::EngineError;
use crate::traits::SubjectController;

/// Change requested for one subject attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Key absent: leave the attribute as it is.
    Unchanged,
    /// Key present with null: clear the attribute.
    Clear,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> FieldUpdate<T> {
    /// `None` when unchanged, otherwise the value to hand to the setter.
    pub fn as_change(&self) -> Option<Option<&T>> {
        match self {
            Self::Unchanged => None,
            Self::Clear => Some(None),
            Self::Set(v) => Some(Some(v)),
        }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectConfiguration {
    pub user_id: FieldUpdate<String>,
    pub network_user_id: FieldUpdate<String>,
    pub domain_user_id: FieldUpdate<String>,
    pub useragent: FieldUpdate<String>,
    pub ip_address: FieldUpdate<String>,
    pub timezone: FieldUpdate<String>,
    pub language: FieldUpdate<String>,
    pub screen_resolution: FieldUpdate<ScreenSize>,
    pub screen_viewport: FieldUpdate<ScreenSize>,
    pub color_depth: FieldUpdate<u32>,
}

/// Outcome of applying a subject record to a live tracker.
#[derive(Debug, Default)]
pub struct SubjectApplyReport {
    /// Host keys of attributes the engine accepted.
    pub applied: Vec<&'static str>,
    pub failures: Vec<(&'static str, EngineError)>,
}

impl SubjectApplyReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, field: &'static str, result: Result<(), EngineError>) {
        match result {
            Ok(()) => self.applied.push(field),
            Err(e) => self.failures.push((field, e)),
        }
    }
}

impl SubjectConfiguration {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Push every non-`Unchanged` attribute to `subject`. Each setter is called
    /// independently; one failure does not stop the rest.
    pub fn apply_to(&self, subject: &dyn SubjectController) -> SubjectApplyReport {
        let mut report = SubjectApplyReport::default();

        if let Some(v) = text(&self.user_id) {
            report.record("userId", subject.set_user_id(v));
        }
        if let Some(v) = text(&self.network_user_id) {
            report.record("networkUserId", subject.set_network_user_id(v));
        }
        if let Some(v) = text(&self.domain_user_id) {
            report.record("domainUserId", subject.set_domain_user_id(v));
        }
        if let Some(v) = text(&self.useragent) {
            report.record("useragent", subject.set_useragent(v));
        }
        if let Some(v) = text(&self.ip_address) {
            report.record("ipAddress", subject.set_ip_address(v));
        }
        if let Some(v) = text(&self.timezone) {
            report.record("timezone", subject.set_timezone(v));
        }
        if let Some(v) = text(&self.language) {
            report.record("language", subject.set_language(v));
        }
        if let Some(v) = self.screen_resolution.as_change() {
            report.record("screenResolution", subject.set_screen_resolution(v.copied()));
        }
        if let Some(v) = self.screen_viewport.as_change() {
            report.record("screenViewport", subject.set_screen_viewport(v.copied()));
        }
        if let Some(v) = self.color_depth.as_change() {
            report.record("colorDepth", subject.set_color_depth(v.copied()));
        }
        report
    }
}

fn text(update: &FieldUpdate<String>) -> Option<Option<&str>> {
    update.as_change().map(|v| v.map(String::as_str))
}
