//! Value-kind fixtures
//!
//! Each [`ValueKind`] describes one dimension of the test matrix: what shape
//! of value to generate and which creation options to request for the
//! bucket. The suite runs its whole case battery once per kind.

use kvs_core::{BucketOptions, BucketValue};

use crate::support::{random_string, DEFAULT_STRING_LEN};

/// One dimension of the conformance matrix
pub struct ValueKind {
    /// Display name used in case labels and error context
    pub name: &'static str,
    /// Bucket creation options for this kind
    pub options: BucketOptions,
    generate: fn() -> BucketValue,
}

impl ValueKind {
    /// Produce a fresh test value of this kind
    pub fn generate(&self) -> BucketValue {
        (self.generate)()
    }
}

fn raw_value() -> BucketValue {
    BucketValue::Raw(random_string(DEFAULT_STRING_LEN))
}

fn hash_value() -> BucketValue {
    BucketValue::hash_field("name", random_string(DEFAULT_STRING_LEN))
}

/// The kinds every conforming backend must handle: plain strings in a
/// default bucket and single-field records in a hash-typed bucket
pub const VALUE_KINDS: &[ValueKind] = &[
    ValueKind {
        name: "string",
        options: BucketOptions::raw(),
        generate: raw_value,
    },
    ValueKind {
        name: "hash",
        options: BucketOptions::hash(),
        generate: hash_value,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use kvs_core::BucketKind;

    #[test]
    fn matrix_covers_both_storage_kinds() {
        let names: Vec<&str> = VALUE_KINDS.iter().map(|k| k.name).collect();
        assert_eq!(names, ["string", "hash"]);
        assert_eq!(VALUE_KINDS[0].options.kind, BucketKind::Raw);
        assert_eq!(VALUE_KINDS[1].options.kind, BucketKind::Hash);
    }

    #[test]
    fn generated_values_match_their_kind() {
        for kind in VALUE_KINDS {
            let value = kind.generate();
            assert_eq!(value.kind(), kind.options.kind);
        }
    }

    #[test]
    fn hash_kind_generates_single_name_field() {
        let value = VALUE_KINDS[1].generate();
        let fields = value.as_hash().expect("hash kind must generate a record");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("name").map(String::len), Some(DEFAULT_STRING_LEN));
    }

    #[test]
    fn generate_returns_fresh_values() {
        let kind = &VALUE_KINDS[0];
        assert_ne!(kind.generate(), kind.generate());
    }
}
