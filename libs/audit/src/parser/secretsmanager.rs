//! EventBridge "AWS API Call via CloudTrail" events for Secrets Manager,
//! forwarded to SNS by the `secretsManager-detect-change` rule.

use serde::Deserialize;
use serde_json::Value;

use super::{NotificationParser, SkipReason, decode_body, envelope_fields, required};
use crate::models::{AuditRecord, SnsNotification};

pub const SOURCE_APP: &str = "AWS Secrets Manager";

const EVENT_BRIDGE_SOURCE: &str = "aws.secretsmanager";
const CLOUDTRAIL_EVENT_SOURCE: &str = "secretsmanager.amazonaws.com";
const LIFECYCLE_EVENTS: [&str; 3] = ["CreateSecret", "UpdateSecret", "DeleteSecret"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloudTrailDetail {
    event_source: Option<String>,
    event_name: Option<String>,
    #[serde(rename = "eventID")]
    event_id: Option<String>,
    request_parameters: Option<RequestParameters>,
    response_elements: Option<ResponseElements>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestParameters {
    secret_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseElements {
    arn: Option<String>,
}

impl CloudTrailDetail {
    /// CreateSecret reports the new ARN in its response; updates and
    /// deletes only name the secret they were called with.
    fn secret_id(self) -> Option<String> {
        self.response_elements
            .and_then(|r| r.arn)
            .or_else(|| self.request_parameters.and_then(|r| r.secret_id))
    }
}

/// Parses Secrets Manager create/update/delete events.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretsManagerParser;

impl NotificationParser for SecretsManagerParser {
    fn parse(&self, notification: &SnsNotification) -> Result<AuditRecord, SkipReason> {
        let body = decode_body(notification)?;

        let detail = match (body.get("source").and_then(Value::as_str), body.get("detail")) {
            (Some(EVENT_BRIDGE_SOURCE), Some(detail)) if detail.is_object() => detail,
            _ => return Err(SkipReason::NotAutomationEvent),
        };

        let (message_id, event_timestamp) = envelope_fields(notification)?;

        let detail = CloudTrailDetail::deserialize(detail).map_err(SkipReason::MalformedPayload)?;

        let event_source = required(detail.event_source.clone(), "detail.eventSource")?;
        if event_source != CLOUDTRAIL_EVENT_SOURCE {
            return Err(SkipReason::UnsupportedSource(event_source));
        }

        let event_name = required(detail.event_name.clone(), "detail.eventName")?;
        if !LIFECYCLE_EVENTS.contains(&event_name.as_str()) {
            return Err(SkipReason::UnsupportedEvent(event_name));
        }

        let reference_id = required(detail.event_id.clone(), "detail.eventID")?;
        let aws_secret_id = required(detail.secret_id(), "secret ARN")?;

        Ok(AuditRecord {
            message_id,
            aws_secret_id,
            reference_id,
            event_name,
            source_app: SOURCE_APP.to_string(),
            event_timestamp,
        })
    }
}
