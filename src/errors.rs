use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

/// Failures surfaced by a single lookup invocation.
///
/// Each variant maps onto exactly one HTTP status in
/// [`crate::api::helpers::error_response`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0}")]
    Validation(String),

    #[error("Error querying table {table}: {source}")]
    Query {
        table: String,
        #[source]
        source: StorageError,
    },

    #[error("{0}")]
    Unexpected(String),
}

impl LookupError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            LookupError::Validation(_) => 400,
            LookupError::Query { .. } | LookupError::Unexpected(_) => 500,
        }
    }
}

/// Failures of the underlying item store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage service error: {0}")]
    Service(String),
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for StorageError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        StorageError::Service(DisplayErrorContext(&error).to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}: invalid boolean value {value:?}")]
    InvalidBool { name: &'static str, value: String },
}
