//! Bucket Value Model
//!
//! A bucket stores either plain strings or flat string-to-string records
//! ("hashes"). [`BucketValue`] covers both shapes behind one type so the
//! [`Bucket`](crate::Bucket) trait stays object safe and backends can persist
//! values with serde without inventing their own wire shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bucket::BucketKind;

/// A value stored under a key in a bucket
///
/// Equality is deep: two `Hash` values are equal only when every field
/// matches. The conformance suite relies on this for its deep-equality
/// assertions.
///
/// Serialization is untagged, so a `Raw` value round-trips as a JSON string
/// and a `Hash` value as a JSON object:
///
/// ```
/// use kvs_core::BucketValue;
///
/// let value = BucketValue::from("hello");
/// assert_eq!(serde_json::to_string(&value).unwrap(), "\"hello\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketValue {
    /// Plain string storage
    Raw(String),
    /// Flat string-to-string record storage
    Hash(HashMap<String, String>),
}

impl BucketValue {
    /// Build a single-field hash value
    pub fn hash_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(field.into(), value.into());
        Self::Hash(fields)
    }

    /// The bucket kind this value belongs in
    pub fn kind(&self) -> BucketKind {
        match self {
            Self::Raw(_) => BucketKind::Raw,
            Self::Hash(_) => BucketKind::Hash,
        }
    }

    /// The string payload, if this is a `Raw` value
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(s) => Some(s),
            Self::Hash(_) => None,
        }
    }

    /// The record payload, if this is a `Hash` value
    pub fn as_hash(&self) -> Option<&HashMap<String, String>> {
        match self {
            Self::Raw(_) => None,
            Self::Hash(fields) => Some(fields),
        }
    }
}

impl From<&str> for BucketValue {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for BucketValue {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<HashMap<String, String>> for BucketValue {
    fn from(fields: HashMap<String, String>) -> Self {
        Self::Hash(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deep_equality_compares_hash_fields() {
        let a = BucketValue::hash_field("name", "alpha");
        let b = BucketValue::hash_field("name", "alpha");
        let c = BucketValue::hash_field("name", "beta");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, BucketValue::from("alpha"));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(BucketValue::from("x").kind(), BucketKind::Raw);
        assert_eq!(BucketValue::hash_field("k", "v").kind(), BucketKind::Hash);
    }

    #[test]
    fn accessors_return_payload_for_matching_variant_only() {
        let raw = BucketValue::from("payload");
        assert_eq!(raw.as_raw(), Some("payload"));
        assert!(raw.as_hash().is_none());

        let hash = BucketValue::hash_field("name", "payload");
        assert!(hash.as_raw().is_none());
        assert_eq!(
            hash.as_hash().and_then(|f| f.get("name")).map(String::as_str),
            Some("payload")
        );
    }

    #[test]
    fn untagged_serialization_round_trips() {
        let raw = BucketValue::from("hello");
        assert_eq!(serde_json::to_value(&raw).unwrap(), json!("hello"));

        let hash = BucketValue::hash_field("name", "hello");
        assert_eq!(serde_json::to_value(&hash).unwrap(), json!({"name": "hello"}));

        let back: BucketValue =
            serde_json::from_value(json!({"name": "hello"})).unwrap();
        assert_eq!(back, hash);
    }
}
