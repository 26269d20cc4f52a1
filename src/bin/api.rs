use exhibition_lookup::api::handler;
use exhibition_lookup::core::config::AppConfig;
use exhibition_lookup::storage::dynamo::DynamoStore;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    exhibition_lookup::setup_logging();

    let config = AppConfig::from_env()?;
    let store = DynamoStore::from_env().await;

    let config = &config;
    let store = &store;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(store, config, event).await
    }))
    .await
}
