pub mod jira;
pub mod secretsmanager;

use serde_json::{Map, Value};

use crate::models::{AuditRecord, SnsNotification};

/// Turns one SNS notification into an audit record, or says why it can't.
///
/// Parsing is pure: the same notification always gives the same answer.
pub trait NotificationParser {
    fn parse(&self, notification: &SnsNotification) -> Result<AuditRecord, SkipReason>;
}

/// Why a notification produced no audit record.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("not an SNS notification: {0}")]
    NotSnsNotification(String),
    #[error("SNS message is empty")]
    EmptyMessage,
    #[error("SNS notification has no {0}")]
    MissingEnvelopeField(&'static str),
    #[error("message body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),
    #[error("message body is not a JSON object")]
    NotAnObject,
    #[error("other type of SNS message")]
    NotAutomationEvent,
    #[error("payload is missing {0}")]
    MissingField(&'static str),
    #[error("payload has an unexpected shape: {0}")]
    MalformedPayload(#[source] serde_json::Error),
    #[error("unsupported event source {0}")]
    UnsupportedSource(String),
    #[error("unsupported event {0}")]
    UnsupportedEvent(String),
}

impl SkipReason {
    /// True when the notification was simply meant for someone else, as
    /// opposed to looking like ours but arriving broken.
    pub fn is_foreign(&self) -> bool {
        matches!(
            self,
            SkipReason::NotSnsNotification(_)
                | SkipReason::EmptyMessage
                | SkipReason::NotAutomationEvent
        )
    }
}

/// Decodes the message body, which must be a JSON object.
pub(crate) fn decode_body(notification: &SnsNotification) -> Result<Map<String, Value>, SkipReason> {
    match serde_json::from_str::<Value>(&notification.message).map_err(SkipReason::MalformedBody)? {
        Value::Object(body) => Ok(body),
        _ => Err(SkipReason::NotAnObject),
    }
}

pub(crate) fn required(value: Option<String>, field: &'static str) -> Result<String, SkipReason> {
    value.ok_or(SkipReason::MissingField(field))
}

/// The transport-assigned fields every record carries, copied verbatim.
pub(crate) fn envelope_fields(notification: &SnsNotification) -> Result<(String, String), SkipReason> {
    let message_id = notification
        .message_id
        .clone()
        .ok_or(SkipReason::MissingEnvelopeField("MessageId"))?;
    let timestamp = notification
        .timestamp
        .clone()
        .ok_or(SkipReason::MissingEnvelopeField("Timestamp"))?;

    if chrono::DateTime::parse_from_rfc3339(&timestamp).is_err() {
        tracing::warn!(%message_id, %timestamp, "SNS timestamp is not RFC 3339, storing as received");
    }

    Ok((message_id, timestamp))
}

/// JSON truthiness: null, false, zero, and empty strings, arrays and objects are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
