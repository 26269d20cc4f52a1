//! Item store seam.
//!
//! The handler only needs one storage operation: a scan of a named table
//! narrowed by a server-side filter expression. [`ItemStore`] is that
//! operation; [`dynamo::DynamoStore`] is the production implementation.

pub mod attribute;
pub mod dynamo;

use std::collections::HashMap;

use async_trait::async_trait;

pub use attribute::{AttrValue, Item, ItemExt};

use crate::errors::StorageError;

/// A full-table scan with a filter applied by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    pub table_name: String,
    pub filter_expression: String,
    /// Placeholder (e.g. `:exhibitionId`) to bound value.
    pub expression_values: HashMap<String, AttrValue>,
}

impl ScanRequest {
    #[must_use]
    pub fn new(table_name: impl Into<String>, filter_expression: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            filter_expression: filter_expression.into(),
            expression_values: HashMap::new(),
        }
    }

    #[must_use]
    pub fn bind(mut self, placeholder: impl Into<String>, value: AttrValue) -> Self {
        self.expression_values.insert(placeholder.into(), value);
        self
    }
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns every item of `request.table_name` matching the filter, in
    /// whatever order the store yields them.
    async fn scan(&self, request: ScanRequest) -> Result<Vec<Item>, StorageError>;
}
