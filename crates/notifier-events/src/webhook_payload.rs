//! Raw payload → [`WebhookEvent`] parsing.
//!
//! The discriminator is read first so an unknown `object_kind` becomes
//! [`WebhookEvent::Unrecognized`] rather than a deserialization failure.
//! Payloads wrapped in a proxy envelope (`{"body": ...}`) are unwrapped when the
//! top level carries no `object_kind`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::webhook_event::WebhookEvent;

const OBJECT_KIND_FIELD: &str = "object_kind";
const ENVELOPE_BODY_FIELD: &str = "body";

#[derive(Debug, Error)]
/// Enumerates supported `EventParseError` values.
pub enum EventParseError {
    #[error("invalid webhook payload: empty body")]
    EmptyBody,
    #[error("invalid webhook payload: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("invalid webhook payload: expected a JSON object")]
    NotAnObject,
    #[error("invalid webhook payload: missing string field 'object_kind'")]
    MissingObjectKind,
    #[error("invalid webhook payload: {object_kind} event: {source}")]
    InvalidShape {
        object_kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse request bytes into a typed webhook event.
pub fn parse_webhook_event(raw: &[u8]) -> Result<WebhookEvent, EventParseError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(EventParseError::EmptyBody);
    }
    let value = serde_json::from_slice::<Value>(raw).map_err(EventParseError::InvalidJson)?;
    webhook_event_from_value(value)
}

/// Classify an already-decoded JSON value by its `object_kind`.
pub fn webhook_event_from_value(value: Value) -> Result<WebhookEvent, EventParseError> {
    let value = unwrap_envelope(value)?;
    let object_kind = match value.get(OBJECT_KIND_FIELD) {
        Some(Value::String(kind)) => kind.clone(),
        _ => return Err(EventParseError::MissingObjectKind),
    };

    let event = match object_kind.as_str() {
        "build" => WebhookEvent::Build(decode(&object_kind, value)?),
        "issue" => WebhookEvent::Issue(decode(&object_kind, value)?),
        "merge_request" => WebhookEvent::MergeRequest(decode(&object_kind, value)?),
        "note" => WebhookEvent::Note(decode(&object_kind, value)?),
        "pipeline" => WebhookEvent::Pipeline(decode(&object_kind, value)?),
        "push" => WebhookEvent::Push(decode(&object_kind, value)?),
        "tag_push" => WebhookEvent::TagPush(decode(&object_kind, value)?),
        "wiki_page" => WebhookEvent::WikiPage(decode(&object_kind, value)?),
        _ => WebhookEvent::Unrecognized { object_kind },
    };
    Ok(event)
}

fn decode<T: DeserializeOwned>(object_kind: &str, value: Value) -> Result<T, EventParseError> {
    serde_json::from_value(value).map_err(|source| EventParseError::InvalidShape {
        object_kind: object_kind.to_string(),
        source,
    })
}

fn unwrap_envelope(value: Value) -> Result<Value, EventParseError> {
    let Value::Object(mut object) = value else {
        return Err(EventParseError::NotAnObject);
    };
    if object.contains_key(OBJECT_KIND_FIELD) {
        return Ok(Value::Object(object));
    }
    match object.remove(ENVELOPE_BODY_FIELD) {
        Some(Value::String(raw)) => {
            let inner =
                serde_json::from_str::<Value>(&raw).map_err(EventParseError::InvalidJson)?;
            if inner.is_object() {
                Ok(inner)
            } else {
                Err(EventParseError::NotAnObject)
            }
        }
        Some(inner @ Value::Object(_)) => Ok(inner),
        Some(_) => Err(EventParseError::NotAnObject),
        None => Ok(Value::Object(object)),
    }
}
