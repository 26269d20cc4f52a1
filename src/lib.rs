//! Exhibition lookup - an API Lambda returning an exhibition by its ID.
//!
//! A request carries `?exhibitionID=<n>`. The handler scans the public and
//! private exhibition tables concurrently, merges the matches (public
//! first) and reshapes each raw record into the client-facing JSON shape.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda behind an API Gateway HTTP API
//! - DynamoDB for the two exhibition tables, behind the [`storage::ItemStore`] seam
//! - Tokio for the concurrent table scans
//!
//! # Example
//!
//! ```no_run
//! use exhibition_lookup::api::handler::handle_request;
//! use exhibition_lookup::core::config::AppConfig;
//! use exhibition_lookup::storage::dynamo::DynamoStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     exhibition_lookup::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let store = DynamoStore::from_env().await;
//!
//!     let payload = serde_json::json!({
//!         "queryStringParameters": { "exhibitionID": "42" }
//!     });
//!     let response = handle_request(&store, &config, &payload).await;
//!     println!("{}", response["body"]);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod exhibitions;
pub mod storage;

pub use errors::{LookupError, StorageError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and defaults
/// to `info`. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// exhibition_lookup::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
