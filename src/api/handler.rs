//! `GET /exhibition?exhibitionID=...` handler.
//!
//! Flow per invocation:
//! - validate the `exhibitionID` query parameter (400 on failure)
//! - scan the public and private tables concurrently (500 on failure)
//! - reshape the merged records and answer 200 with `{"exhibitions": [...]}`
//!
//! Every failure, including a panic, is turned into a JSON response here;
//! the Lambda runtime never sees an `Err`.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{LEGACY_MISSING_ID_MESSAGE, MISSING_ID_MESSAGE, helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::ExhibitionsBody;
use crate::errors::LookupError;
use crate::exhibitions::{query_tables, transform_exhibitions};
use crate::storage::ItemStore;

pub use self::function_handler as handler;

/// Lambda handler for the exhibition lookup.
///
/// `store` and `config` are built once at cold start and shared by every
/// invocation.
///
/// # Errors
///
/// Never returns `Err`; failures are reported as 400/500 responses.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<S>(
    store: &S,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    S: ItemStore + ?Sized,
{
    info!("Request received: {}", event.payload);
    Ok(handle_request(store, config, &event.payload).await)
}

/// Runs one lookup against `payload` and always produces a proxy response.
pub async fn handle_request<S>(store: &S, config: &AppConfig, payload: &Value) -> Value
where
    S: ItemStore + ?Sized,
{
    match AssertUnwindSafe(lookup(store, config, payload))
        .catch_unwind()
        .await
    {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            match &e {
                LookupError::Validation(message) => error!("{}", message),
                LookupError::Query { .. } => error!("Error in query_tables: {}", e),
                LookupError::Unexpected(_) => error!("Unexpected error in handler: {}", e),
            }
            helpers::error_response(&e)
        }
        Err(panic) => {
            let e = LookupError::Unexpected(panic_message(panic.as_ref()));
            error!("Unexpected error in handler: {}", e);
            helpers::error_response(&e)
        }
    }
}

async fn lookup<S>(store: &S, config: &AppConfig, payload: &Value) -> Result<Value, LookupError>
where
    S: ItemStore + ?Sized,
{
    let exhibition_id = parsing::exhibition_id(payload)
        .ok_or_else(|| LookupError::Validation(missing_id_message(config).to_string()))?;

    info!(exhibition_id = %exhibition_id, "Querying tables for exhibition");

    let items = query_tables(store, config, &exhibition_id).await?;
    info!(count = items.len(), "Query completed");

    if items.is_empty() {
        info!("Query completed. No matching exhibitions");
    }

    let exhibitions = transform_exhibitions(&items);
    helpers::ok_json(&ExhibitionsBody::new(
        exhibitions,
        config.legacy_wire_compat,
    ))
}

fn missing_id_message(config: &AppConfig) -> &'static str {
    if config.legacy_wire_compat {
        LEGACY_MISSING_ID_MESSAGE
    } else {
        MISSING_ID_MESSAGE
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
