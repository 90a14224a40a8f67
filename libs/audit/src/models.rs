use serde::{Deserialize, Serialize};

/// The `Sns` object of a single record in an SNS-to-Lambda batch.
///
/// `MessageId` and `Timestamp` are optional here so the envelope decodes even
/// when they are absent; parsers decide whether their absence disqualifies it.
#[derive(Debug, Clone, Deserialize)]
pub struct SnsNotification {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "MessageId", default)]
    pub message_id: Option<String>,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
}

/// One row of the audit table.
///
/// Serializes with the table's attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "AWSsecretId")]
    pub aws_secret_id: String,
    #[serde(rename = "referenceId")]
    pub reference_id: String,
    #[serde(rename = "eventName")]
    pub event_name: String,
    #[serde(rename = "sourceApp")]
    pub source_app: String,
    #[serde(rename = "eventTimeStamp")]
    pub event_timestamp: String,
}

/// What every invocation returns, whether or not a record was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    /// Always 200, with the original input echoed back as a JSON string.
    pub fn echo(event: &serde_json::Value) -> Self {
        Self {
            status_code: 200,
            body: event.to_string(),
        }
    }
}
