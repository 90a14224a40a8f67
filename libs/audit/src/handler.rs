use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;

use crate::db::{AuditStore, StoreError};
use crate::models::{AuditRecord, InvocationResponse, SnsNotification};
use crate::parser::{NotificationParser, SkipReason};

/// What happened to one invocation. Only ever logged; the caller always
/// sees a 200.
#[derive(Debug)]
pub enum Outcome {
    Recorded(AuditRecord),
    Skipped(SkipReason),
    WriteFailed(StoreError),
}

/// Runs one notification batch through a parser and into a store.
#[derive(Debug, Clone)]
pub struct Receiver<P, S> {
    parser: P,
    store: S,
}

impl<P, S> Receiver<P, S>
where
    P: NotificationParser + Sync,
    S: AuditStore + Sync,
{
    pub fn new(parser: P, store: S) -> Self {
        Self { parser, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Examines only the first record of the batch and writes at most once.
    pub async fn receive(&self, event: &Value) -> Outcome {
        let record = match first_notification(event).and_then(|n| self.parser.parse(&n)) {
            Ok(record) => record,
            Err(reason) => {
                if reason.is_foreign() {
                    tracing::info!(%reason, "Skipping notification");
                } else {
                    tracing::warn!(%reason, "Dropping malformed notification");
                }
                return Outcome::Skipped(reason);
            }
        };

        match self.store.put_audit_record(&record).await {
            Ok(()) => {
                tracing::info!(
                    message_id = %record.message_id,
                    reference_id = %record.reference_id,
                    secret_id = %record.aws_secret_id,
                    source_app = %record.source_app,
                    "Recorded audit record"
                );
                Outcome::Recorded(record)
            }
            Err(err) => {
                tracing::error!("Error creating audit record {}: {}", record.message_id, err);
                Outcome::WriteFailed(err)
            }
        }
    }
}

/// Lambda entry point shared by every detection function.
pub async fn handle_invocation<P, S>(
    receiver: &Receiver<P, S>,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error>
where
    P: NotificationParser + Sync,
    S: AuditStore + Sync,
{
    let (payload, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "Event: {}", payload);

    receiver.receive(&payload).await;

    Ok(InvocationResponse::echo(&payload))
}

fn first_notification(event: &Value) -> Result<SnsNotification, SkipReason> {
    let sns = event
        .get("Records")
        .and_then(|records| records.get(0))
        .and_then(|record| record.get("Sns"))
        .ok_or_else(|| SkipReason::NotSnsNotification("no Records[0].Sns".to_string()))?;

    let notification = SnsNotification::deserialize(sns)
        .map_err(|err| SkipReason::NotSnsNotification(err.to_string()))?;

    if notification.message.is_empty() {
        return Err(SkipReason::EmptyMessage);
    }

    Ok(notification)
}
