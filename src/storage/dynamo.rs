//! DynamoDB-backed [`ItemStore`].

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use super::{AttrValue, Item, ItemStore, ScanRequest};
use crate::errors::StorageError;

#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamoClient,
}

impl DynamoStore {
    #[must_use]
    pub fn new(client: DynamoClient) -> Self {
        Self { client }
    }

    /// Builds a client from the default AWS provider chain.
    pub async fn from_env() -> Self {
        let shared_config = aws_config::from_env().load().await;
        Self::new(DynamoClient::new(&shared_config))
    }
}

#[async_trait]
impl ItemStore for DynamoStore {
    async fn scan(&self, request: ScanRequest) -> Result<Vec<Item>, StorageError> {
        let values: HashMap<String, AttributeValue> = request
            .expression_values
            .into_iter()
            .map(|(k, v)| (k, to_sdk(v)))
            .collect();

        let mut items = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;
        let mut pages = 0usize;

        // A filtered scan stops at 1 MB of *examined* data, so matches can
        // sit behind any number of pages.
        loop {
            let output = self
                .client
                .scan()
                .table_name(&request.table_name)
                .filter_expression(&request.filter_expression)
                .set_expression_attribute_values(Some(values.clone()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await?;
            pages += 1;

            items.extend(output.items.unwrap_or_default().into_iter().map(item_from_sdk));

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        debug!(
            table = %request.table_name,
            pages,
            matched = items.len(),
            "Scan finished"
        );
        Ok(items)
    }
}

/// Converts one raw SDK record.
#[must_use]
pub fn item_from_sdk(raw: HashMap<String, AttributeValue>) -> Item {
    raw.into_iter().map(|(k, v)| (k, from_sdk(v))).collect()
}

/// Attribute types this SDK version does not model read as [`AttrValue::Null`].
#[must_use]
pub fn from_sdk(value: AttributeValue) -> AttrValue {
    match value {
        AttributeValue::S(s) => AttrValue::S(s),
        AttributeValue::N(n) => AttrValue::N(n),
        AttributeValue::Bool(b) => AttrValue::Bool(b),
        AttributeValue::Null(_) => AttrValue::Null,
        AttributeValue::B(blob) => AttrValue::B(blob.into_inner()),
        AttributeValue::Ss(set) => AttrValue::L(set.into_iter().map(AttrValue::S).collect()),
        AttributeValue::Ns(set) => AttrValue::L(set.into_iter().map(AttrValue::N).collect()),
        AttributeValue::Bs(set) => AttrValue::L(
            set.into_iter()
                .map(|b| AttrValue::B(b.into_inner()))
                .collect(),
        ),
        AttributeValue::L(list) => AttrValue::L(list.into_iter().map(from_sdk).collect()),
        AttributeValue::M(map) => AttrValue::M(item_from_sdk(map)),
        other => {
            debug!(value = ?other, "Unknown attribute type read as null");
            AttrValue::Null
        }
    }
}

#[must_use]
pub fn to_sdk(value: AttrValue) -> AttributeValue {
    match value {
        AttrValue::S(s) => AttributeValue::S(s),
        AttrValue::N(n) => AttributeValue::N(n),
        AttrValue::Bool(b) => AttributeValue::Bool(b),
        AttrValue::Null => AttributeValue::Null(true),
        AttrValue::B(bytes) => AttributeValue::B(Blob::new(bytes)),
        AttrValue::L(list) => AttributeValue::L(list.into_iter().map(to_sdk).collect()),
        AttrValue::M(map) => {
            AttributeValue::M(map.into_iter().map(|(k, v)| (k, to_sdk(v))).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_nested_records() {
        let content = HashMap::from([
            ("ItemTitle".to_string(), AttributeValue::S("Vase".into())),
            ("ItemID".to_string(), AttributeValue::N("9".into())),
        ]);
        let raw = HashMap::from([
            ("ExhibitionID".to_string(), AttributeValue::N("42".into())),
            (
                "ExhibitContent".to_string(),
                AttributeValue::L(vec![AttributeValue::M(content)]),
            ),
        ]);

        let item = item_from_sdk(raw);
        assert_eq!(item.get("ExhibitionID"), Some(&AttrValue::N("42".into())));

        let list = item.get("ExhibitContent").and_then(AttrValue::as_l).unwrap();
        let first = list[0].as_m().unwrap();
        assert_eq!(first.get("ItemTitle").and_then(AttrValue::as_s), Some("Vase"));
        assert_eq!(first.get("ItemID").and_then(AttrValue::as_n), Some("9"));
    }

    #[test]
    fn sets_become_lists_and_null_is_preserved() {
        let ss = from_sdk(AttributeValue::Ss(vec!["a".into(), "b".into()]));
        assert_eq!(
            ss,
            AttrValue::L(vec![AttrValue::S("a".into()), AttrValue::S("b".into())])
        );
        assert_eq!(from_sdk(AttributeValue::Null(true)), AttrValue::Null);
    }

    #[test]
    fn filter_values_are_sent_with_their_type() {
        assert_eq!(
            to_sdk(AttrValue::N("42".into())),
            AttributeValue::N("42".into())
        );
        assert_eq!(to_sdk(AttrValue::Null), AttributeValue::Null(true));
    }
}
