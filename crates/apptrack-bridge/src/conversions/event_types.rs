//! Event Encoder: event-kind tag + untyped data + untyped contexts → TypedEvent.

use apptrack_core::config::Trigger;
use apptrack_core::errors::TranslationError;
use apptrack_core::event::*;
use apptrack_core::SelfDescribingJson;
use serde_json::Value;

use super::input::Input;

type Result<T> = std::result::Result<T, TranslationError>;

/// Encode one event of `kind` from `event_data`, attaching `contexts` in order.
///
/// For [`EventKind::Custom`], `event_data` is `{ eventName, eventData }`.
/// Kinds that take no contexts ignore whatever is supplied.
pub fn encode_event(
    kind: EventKind,
    event_data: &Value,
    contexts: Option<&Value>,
) -> Result<TypedEvent> {
    let data = Input::from_value(kind.as_str(), event_data)?;
    let event = match kind {
        EventKind::SelfDescribing => Event::SelfDescribing(self_describing(data)?),
        EventKind::Structured => Event::Structured(structured(data)?),
        EventKind::ScreenView => Event::ScreenView(screen_view(data)?),
        EventKind::PageView => Event::PageView(page_view(data)?),
        EventKind::Timing => Event::Timing(timing(data)?),
        EventKind::ConsentGranted => Event::ConsentGranted(consent_granted(data)?),
        EventKind::ConsentWithdrawn => Event::ConsentWithdrawn(consent_withdrawn(data)?),
        EventKind::EcommerceTransaction => {
            Event::EcommerceTransaction(ecommerce_transaction(data)?)
        }
        EventKind::DeepLinkReceived => Event::DeepLinkReceived(deep_link_received(data)?),
        EventKind::MessageNotification => {
            Event::MessageNotification(message_notification(data)?)
        }
        EventKind::ButtonClick => Event::ButtonClick(button_click(data)?),
        EventKind::Custom => {
            let name = data.required_str("eventName")?;
            let payload = data.raw("eventData").unwrap_or(&Value::Null);
            Event::Custom(custom_event(name, payload)?)
        }
    };

    if !kind.accepts_contexts() {
        return Ok(TypedEvent::without_contexts(event));
    }
    Ok(TypedEvent::new(event, context_list(kind.as_str(), contexts)?))
}

/// Escape hatch for shapes the bridge does not model: `data` is carried as
/// JSON text under `name`. A missing payload encodes as `{}`.
pub fn custom_event(name: &str, data: &Value) -> Result<CustomEvent> {
    if name.is_empty() {
        return Err(TranslationError::invalid_value("custom", "eventName", "must not be empty"));
    }
    let payload_json = match data {
        Value::Null => "{}".to_string(),
        Value::Object(_) => serde_json::to_string(data)
            .map_err(|e| TranslationError::invalid_value("custom", "eventData", e.to_string()))?,
        _ => return Err(TranslationError::invalid_type("custom", "eventData", "an object")),
    };
    Ok(CustomEvent {
        name: name.to_string(),
        payload_json,
    })
}

/// Decode an ordered context list. Absent, null and empty all yield no contexts.
pub fn context_list(domain: &str, contexts: Option<&Value>) -> Result<Vec<SelfDescribingJson>> {
    match contexts {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let ctx_domain = format!("{domain}.contexts[{i}]");
                self_describing(Input::from_value(&ctx_domain, item)?)
            })
            .collect(),
        Some(_) => Err(TranslationError::invalid_type(domain, "contexts", "an array")),
    }
}

/// `{ schema, data }` where `data` is an object.
pub fn self_describing(input: Input<'_>) -> Result<SelfDescribingJson> {
    let schema = input.required_string("schema")?;
    let data = input
        .owned_map("data")?
        .ok_or_else(|| TranslationError::missing(input.domain(), "data"))?;
    Ok(SelfDescribingJson::new(schema, Value::Object(data)))
}

fn structured(input: Input<'_>) -> Result<Structured> {
    Ok(Structured {
        category: input.required_string("category")?,
        action: input.required_string("action")?,
        label: input.string("label")?,
        property: input.string("property")?,
        value: input.f64("value")?,
    })
}

fn screen_view(input: Input<'_>) -> Result<ScreenView> {
    Ok(ScreenView {
        name: input.required_string("name")?,
        id: input.string("id")?,
        screen_type: input.string("type")?,
        previous_name: input.string("previousName")?,
        previous_id: input.string("previousId")?,
        previous_type: input.string("previousType")?,
        transition_type: input.string("transitionType")?,
    })
}

fn page_view(input: Input<'_>) -> Result<PageView> {
    Ok(PageView {
        page_url: input.required_string("pageUrl")?,
        page_title: input.string("pageTitle")?,
        referrer: input.string("referrer")?,
    })
}

fn timing(input: Input<'_>) -> Result<Timing> {
    Ok(Timing {
        category: input.required_string("category")?,
        variable: input.required_string("variable")?,
        timing: input.required_i64("timing")?,
        label: input.string("label")?,
    })
}

fn consent_granted(input: Input<'_>) -> Result<ConsentGranted> {
    Ok(ConsentGranted {
        expiry: input.required_string("expiry")?,
        document_id: input.required_string("documentId")?,
        version: input.required_string("version")?,
        name: input.string("name")?,
        document_description: input.string("documentDescription")?,
    })
}

fn consent_withdrawn(input: Input<'_>) -> Result<ConsentWithdrawn> {
    Ok(ConsentWithdrawn {
        all: input.required_bool("all")?,
        document_id: input.required_string("documentId")?,
        version: input.required_string("version")?,
        name: input.string("name")?,
        document_description: input.string("documentDescription")?,
    })
}

fn ecommerce_transaction(input: Input<'_>) -> Result<EcommerceTransaction> {
    let items = input
        .required_array("items")?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let domain = format!("{}.items[{i}]", input.domain());
            ecommerce_item(Input::from_value(&domain, item)?)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(EcommerceTransaction {
        order_id: input.required_string("orderId")?,
        total_value: input.required_f64("totalValue")?,
        items,
        affiliation: input.string("affiliation")?,
        tax_value: input.f64("taxValue")?,
        shipping: input.f64("shipping")?,
        city: input.string("city")?,
        state: input.string("state")?,
        country: input.string("country")?,
        currency: input.string("currency")?,
    })
}

fn ecommerce_item(input: Input<'_>) -> Result<EcommerceItem> {
    Ok(EcommerceItem {
        sku: input.required_string("sku")?,
        price: input.required_f64("price")?,
        quantity: input.required_i64("quantity")?,
        name: input.string("name")?,
        category: input.string("category")?,
        currency: input.string("currency")?,
    })
}

fn deep_link_received(input: Input<'_>) -> Result<DeepLinkReceived> {
    Ok(DeepLinkReceived {
        url: input.required_string("url")?,
        referrer: input.string("referrer")?,
    })
}

fn message_notification(input: Input<'_>) -> Result<MessageNotification> {
    let token = input.required_str("trigger")?;
    let trigger = Trigger::parse(token).ok_or_else(|| {
        TranslationError::invalid_value(
            input.domain(),
            "trigger",
            format!("'{token}' is not one of {}", Trigger::TOKENS.join(", ")),
        )
    })?;

    let attachments = match input.array("attachments")? {
        None => Vec::new(),
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let domain = format!("{}.attachments[{i}]", input.domain());
                let a = Input::from_value(&domain, item)?;
                Ok(NotificationAttachment {
                    identifier: a.required_string("identifier")?,
                    attachment_type: a.required_string("type")?,
                    url: a.required_string("url")?,
                })
            })
            .collect::<Result<Vec<_>>>()?,
    };

    Ok(MessageNotification {
        title: input.required_string("title")?,
        body: input.required_string("body")?,
        trigger,
        action: input.string("action")?,
        attachments,
        body_loc_args: input.string_list("bodyLocArgs")?,
        body_loc_key: input.string("bodyLocKey")?,
        category: input.string("category")?,
        content_available: input.bool("contentAvailable")?,
        group: input.string("group")?,
        icon: input.string("icon")?,
        notification_count: input.i64("notificationCount")?,
        notification_timestamp: input.string("notificationTimestamp")?,
        sound: input.string("sound")?,
        subtitle: input.string("subtitle")?,
        tag: input.string("tag")?,
        thread_identifier: input.string("threadIdentifier")?,
        title_loc_args: input.string_list("titleLocArgs")?,
        title_loc_key: input.string("titleLocKey")?,
    })
}

fn button_click(input: Input<'_>) -> Result<ButtonClick> {
    if input.map().is_empty() {
        return Err(TranslationError::invalid_value(
            input.domain(),
            "eventData",
            "click attributes must not be empty",
        ));
    }
    Ok(ButtonClick {
        attributes: input.map().clone(),
    })
}
