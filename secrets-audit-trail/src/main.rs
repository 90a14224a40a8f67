use std::sync::Arc;

use audit::{Config, DynamoDbStore, Receiver, SecretsManagerParser, handle_invocation};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    audit::telemetry::init();

    let config = Config::from_env()?;
    let store = DynamoDbStore::from_env(&config).await;
    tracing::info!("Recording Secrets Manager lifecycle events into table {}", store.table_name());

    let receiver = Arc::new(Receiver::new(SecretsManagerParser, store));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let receiver = receiver.clone();
        async move { handle_invocation(&*receiver, event).await }
    }))
    .await
}
