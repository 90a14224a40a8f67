mod schema;

use std::collections::HashMap;
use std::future::Future;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::config::Config;
use crate::models::AuditRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to put item into table {table}: {source}")]
    PutItem {
        table: String,
        #[source]
        source: aws_sdk_dynamodb::Error,
    },
}

/// Append-only sink for audit records.
pub trait AuditStore {
    /// Writes `record` as a new item. An item with the same key is
    /// overwritten; there is no existence check.
    fn put_audit_record(&self, record: &AuditRecord) -> impl Future<Output = Result<(), StoreError>> + Send;
}

#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbStore {
    pub fn new(client: aws_sdk_dynamodb::Client, config: &Config) -> Self {
        Self {
            client,
            table_name: config.table_name.clone(),
        }
    }

    pub async fn from_env(config: &Config) -> Self {
        let client = aws_sdk_dynamodb::Client::new(&aws_config::load_from_env().await);
        Self::new(client, config)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl AuditStore for DynamoDbStore {
    async fn put_audit_record(&self, record: &AuditRecord) -> Result<(), StoreError> {
        tracing::debug!("Creating record in table {}", self.table_name);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|err| StoreError::PutItem {
                table: self.table_name.clone(),
                source: err.into(),
            })?;

        Ok(())
    }
}

fn to_item(record: &AuditRecord) -> HashMap<String, AttributeValue> {
    [
        (schema::MESSAGE_ID, &record.message_id),
        (schema::AWS_SECRET_ID, &record.aws_secret_id),
        (schema::REFERENCE_ID, &record.reference_id),
        (schema::EVENT_NAME, &record.event_name),
        (schema::SOURCE_APP, &record.source_app),
        (schema::EVENT_TIMESTAMP, &record.event_timestamp),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), AttributeValue::S(value.clone())))
    .collect()
}
