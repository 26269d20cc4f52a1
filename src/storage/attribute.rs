//! Store-agnostic attribute values.
//!
//! Raw records are heterogeneous maps; every read goes through an accessor
//! that returns `Option` so a missing or differently-typed attribute never
//! fails the caller.

use std::collections::HashMap;

/// One stored record: attribute name to value.
pub type Item = HashMap<String, AttrValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    S(String),
    /// Numbers keep their wire text; nothing here needs arithmetic.
    N(String),
    Bool(bool),
    Null,
    B(Vec<u8>),
    L(Vec<AttrValue>),
    M(Item),
}

impl AttrValue {
    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttrValue::S(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttrValue::N(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_l(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::L(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_m(&self) -> Option<&Item> {
        match self {
            AttrValue::M(map) => Some(map),
            _ => None,
        }
    }

    /// Renders scalar values as text; lists, maps, binary and null give `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            AttrValue::S(s) | AttrValue::N(s) => Some(s.clone()),
            AttrValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::S(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::S(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Item> for AttrValue {
    fn from(value: Item) -> Self {
        AttrValue::M(value)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(value: Vec<AttrValue>) -> Self {
        AttrValue::L(value)
    }
}

/// Safe lookups on a record.
pub trait ItemExt {
    fn s(&self, key: &str) -> Option<&str>;
    fn n(&self, key: &str) -> Option<&str>;
    fn l(&self, key: &str) -> Option<&[AttrValue]>;
    fn text(&self, key: &str) -> Option<String>;
}

impl ItemExt for Item {
    fn s(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_s)
    }

    fn n(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_n)
    }

    fn l(&self, key: &str) -> Option<&[AttrValue]> {
        self.get(key).and_then(AttrValue::as_l)
    }

    fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(AttrValue::as_text)
    }
}
