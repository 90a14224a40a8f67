use serde::Deserialize;

use super::{NotificationParser, SkipReason, decode_body, envelope_fields, is_truthy, required};
use crate::models::{AuditRecord, SnsNotification};

pub const SOURCE_APP: &str = "Jira";

/// The `automationData` object a Jira automation rule publishes.
#[derive(Debug, Deserialize)]
struct AutomationData {
    #[serde(rename = "jira-key")]
    key: Option<String>,
    #[serde(rename = "jira-summary")]
    summary: Option<String>,
    #[serde(rename = "jira-aws-secret-key-arn")]
    secret_arn: Option<String>,
}

/// Parses Jira automation notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct JiraParser;

impl NotificationParser for JiraParser {
    fn parse(&self, notification: &SnsNotification) -> Result<AuditRecord, SkipReason> {
        let body = decode_body(notification)?;

        let automation_data = match body.get("automationData") {
            Some(value) if is_truthy(value) => value,
            _ => return Err(SkipReason::NotAutomationEvent),
        };

        let (message_id, event_timestamp) = envelope_fields(notification)?;

        // a partial object drops the whole notification
        let data = AutomationData::deserialize(automation_data).map_err(SkipReason::MalformedPayload)?;
        let reference_id = required(data.key, "jira-key")?;
        let event_name = required(data.summary, "jira-summary")?;
        let aws_secret_id = required(data.secret_arn, "jira-aws-secret-key-arn")?;

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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const SECRET_ARN: &str = "arn:aws:secretsmanager:us-east-1:123456789012:secret:foo";

    fn notification(body: Value) -> SnsNotification {
        SnsNotification {
            message: body.to_string(),
            message_id: Some("m1".to_string()),
            timestamp: Some("2024-01-01T00:00:00Z".to_string()),
        }
    }

    fn complete_body() -> Value {
        json!({
            "automationData": {
                "jira-key": "JIRA-42",
                "jira-summary": "Rotate secret",
                "jira-aws-secret-key-arn": SECRET_ARN,
            }
        })
    }

    #[test]
    fn complete_automation_data_becomes_a_record() {
        let record = JiraParser.parse(&notification(complete_body())).unwrap();

        assert_eq!(
            record,
            AuditRecord {
                message_id: "m1".to_string(),
                aws_secret_id: SECRET_ARN.to_string(),
                reference_id: "JIRA-42".to_string(),
                event_name: "Rotate secret".to_string(),
                source_app: "Jira".to_string(),
                event_timestamp: "2024-01-01T00:00:00Z".to_string(),
            }
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let mut body = complete_body();
        body["automationData"]["jira-priority"] = json!("High");
        body["issue"] = json!({ "id": 7 });

        assert!(JiraParser.parse(&notification(body)).is_ok());
    }

    #[test]
    fn other_shapes_are_not_automation_events() {
        for body in [
            json!({}),
            json!({ "detail-type": "AWS API Call via CloudTrail" }),
            json!({ "automationData": null }),
            json!({ "automationData": {} }),
            json!({ "automationData": "" }),
        ] {
            assert!(
                matches!(JiraParser.parse(&notification(body.clone())), Err(SkipReason::NotAutomationEvent)),
                "{body} should not qualify"
            );
        }
    }

    #[test]
    fn missing_sub_field_drops_the_notification() {
        for field in ["jira-key", "jira-summary", "jira-aws-secret-key-arn"] {
            let mut body = complete_body();
            body["automationData"].as_object_mut().unwrap().remove(field);

            match JiraParser.parse(&notification(body)) {
                Err(SkipReason::MissingField(missing)) => assert_eq!(missing, field),
                other => panic!("expected missing {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_string_sub_fields_are_malformed() {
        let mut body = complete_body();
        body["automationData"]["jira-key"] = json!(42);
        assert!(matches!(
            JiraParser.parse(&notification(body)),
            Err(SkipReason::MalformedPayload(_))
        ));

        assert!(matches!(
            JiraParser.parse(&notification(json!({ "automationData": "JIRA-42" }))),
            Err(SkipReason::MalformedPayload(_))
        ));
    }

    #[test]
    fn malformed_json_is_skipped() {
        let mut n = notification(json!({}));
        n.message = "{\"automationData\": {".to_string();

        assert!(matches!(JiraParser.parse(&n), Err(SkipReason::MalformedBody(_))));
    }

    #[test]
    fn missing_message_id_is_skipped() {
        let mut n = notification(complete_body());
        n.message_id = None;

        assert!(matches!(
            JiraParser.parse(&n),
            Err(SkipReason::MissingEnvelopeField("MessageId"))
        ));
    }

    #[test]
    fn missing_timestamp_is_skipped() {
        let mut n = notification(complete_body());
        n.timestamp = None;

        assert!(matches!(
            JiraParser.parse(&n),
            Err(SkipReason::MissingEnvelopeField("Timestamp"))
        ));
    }
}
