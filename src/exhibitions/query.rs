use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::LookupError;
use crate::storage::{AttrValue, Item, ItemStore, ScanRequest};

pub const EXHIBITION_ID_FILTER: &str = "ExhibitionID = :exhibitionId";
pub const EXHIBITION_ID_PLACEHOLDER: &str = ":exhibitionId";

/// Scan request matching `exhibition_id` in `table`.
///
/// The identifier is bound as a number, unparsed; the store rejects
/// non-numeric text.
#[must_use]
pub fn exhibition_scan(table: &str, exhibition_id: &str) -> ScanRequest {
    ScanRequest::new(table, EXHIBITION_ID_FILTER).bind(
        EXHIBITION_ID_PLACEHOLDER,
        AttrValue::N(exhibition_id.to_string()),
    )
}

async fn query_table<S>(store: &S, table: &str, exhibition_id: &str) -> Result<Vec<Item>, LookupError>
where
    S: ItemStore + ?Sized,
{
    store
        .scan(exhibition_scan(table, exhibition_id))
        .await
        .map_err(|source| {
            error!(table = %table, error = %source, "Table scan failed");
            LookupError::Query {
                table: table.to_string(),
                source,
            }
        })
}

/// Scans the public and private tables concurrently and returns the public
/// matches followed by the private ones.
///
/// # Errors
///
/// Returns [`LookupError::Query`] naming the first table whose scan fails.
/// The other scan is abandoned; no partial result is returned.
pub async fn query_tables<S>(
    store: &S,
    config: &AppConfig,
    exhibition_id: &str,
) -> Result<Vec<Item>, LookupError>
where
    S: ItemStore + ?Sized,
{
    let (public, private) = tokio::try_join!(
        query_table(store, &config.public_table, exhibition_id),
        query_table(store, &config.private_table, exhibition_id),
    )?;

    info!(
        public = public.len(),
        private = private.len(),
        "Queried exhibition tables"
    );

    let mut combined = public;
    combined.extend(private);
    Ok(combined)
}
