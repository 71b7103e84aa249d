//! Subject bindings: one setter per attribute plus a whole-record apply.
//!
//! Setters take `{ tracker, <field>: value | null }`. The field key must be
//! present; null clears the attribute.

use apptrack_core::config::ScreenSize;
use apptrack_core::errors::{BridgeResult, EngineError, EngineResult, TranslationError};
use apptrack_core::SubjectController;
use serde_json::Value;

use crate::bridge::Bridge;
use crate::conversions::config_types::{screen_size, subject_configuration};
use crate::conversions::error_codes::BridgeOutcome;
use crate::conversions::input::Input;
use crate::validation;

impl Bridge {
    fn set_subject_field<T, R, A>(&self, method: &str, key: &str, args: &Value, read: R, apply: A) -> BridgeOutcome
    where
        R: FnOnce(Input<'_>, &str) -> BridgeResult<Option<T>>,
        A: FnOnce(&dyn SubjectController, Option<T>) -> EngineResult<()>,
    {
        self.call(method, || {
            let input = Input::from_value(method, args)?;
            let tracker = self.target(input)?;
            if !input.has(key) {
                return Err(TranslationError::missing(method, key).into());
            }
            let value = read(input, key)?;
            apply(tracker.subject(), value)?;
            Ok(Value::Bool(true))
        })
    }

    fn set_subject_text<A>(&self, method: &str, key: &str, args: &Value, apply: A) -> BridgeOutcome
    where
        A: FnOnce(&dyn SubjectController, Option<&str>) -> EngineResult<()>,
    {
        self.set_subject_field(
            method,
            key,
            args,
            |input, key| Ok(input.string(key)?),
            |subject, value: Option<String>| apply(subject, value.as_deref()),
        )
    }

    fn set_subject_screen<A>(&self, method: &str, key: &str, args: &Value, apply: A) -> BridgeOutcome
    where
        A: FnOnce(&dyn SubjectController, Option<ScreenSize>) -> EngineResult<()>,
    {
        self.set_subject_field(method, key, args, read_screen_size, apply)
    }

    pub fn set_user_id(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_text("setUserId", "userId", args, |s, v| s.set_user_id(v))
    }

    pub fn set_network_user_id(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_text("setNetworkUserId", "networkUserId", args, |s, v| {
            s.set_network_user_id(v)
        })
    }

    pub fn set_domain_user_id(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_text("setDomainUserId", "domainUserId", args, |s, v| {
            s.set_domain_user_id(v)
        })
    }

    pub fn set_ip_address(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_text("setIpAddress", "ipAddress", args, |s, v| s.set_ip_address(v))
    }

    pub fn set_useragent(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_text("setUseragent", "useragent", args, |s, v| s.set_useragent(v))
    }

    pub fn set_timezone(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_text("setTimezone", "timezone", args, |s, v| s.set_timezone(v))
    }

    pub fn set_language(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_text("setLanguage", "language", args, |s, v| s.set_language(v))
    }

    /// `{ tracker, screenResolution: [w, h] | null }`.
    pub fn set_screen_resolution(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_screen("setScreenResolution", "screenResolution", args, |s, v| {
            s.set_screen_resolution(v)
        })
    }

    /// `{ tracker, screenViewport: [w, h] | null }`.
    pub fn set_screen_viewport(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_screen("setScreenViewport", "screenViewport", args, |s, v| {
            s.set_screen_viewport(v)
        })
    }

    pub fn set_color_depth(&self, args: &Value) -> BridgeOutcome {
        self.set_subject_field(
            "setColorDepth",
            "colorDepth",
            args,
            |input, key| Ok(input.u32(key)?),
            |s, v| s.set_color_depth(v),
        )
    }

    /// `{ tracker, subjectConfig }`: apply a whole subject record at once.
    ///
    /// Every present field is attempted. Failing fields are joined into one
    /// engine failure: `setSubjectData:field: reason:field: reason`.
    pub fn set_subject_data(&self, args: &Value) -> BridgeOutcome {
        self.call("setSubjectData", || {
            let input = Input::from_value("setSubjectData", args)?;
            let tracker = self.target(input)?;
            let subject = input.required_object("subjectConfig")?;
            if self.config.validation.strict {
                validation::into_result(validation::validate_subject("subjectConfig", subject.map()))?;
            }

            let report = subject_configuration(subject)?.apply_to(tracker.subject());
            tracing::debug!(applied = ?report.applied, failed = report.failures.len(), "subject data applied");
            if report.is_success() {
                return Ok(Value::Bool(true));
            }
            let reasons: String = report
                .failures
                .iter()
                .map(|(field, err)| format!(":{field}: {err}"))
                .collect();
            Err(EngineError::operation(
                tracker.namespace(),
                "setSubjectData",
                format!("setSubjectData{reasons}"),
            )
            .into())
        })
    }
}

fn read_screen_size(input: Input<'_>, key: &str) -> BridgeResult<Option<ScreenSize>> {
    match input.raw(key) {
        None => Ok(None),
        Some(value) => screen_size(value).map(Some).ok_or_else(|| {
            TranslationError::invalid_type(input.domain(), key, "a [width, height] array").into()
        }),
    }
}
