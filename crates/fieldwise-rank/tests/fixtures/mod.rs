//! Test fixtures for ranking pipeline tests.
//!
//! Provides reusable schema and content builders for integration tests.

use fieldwise_core::{ContentValue, FieldDefinition};
use uuid::Uuid;

/// Every schema kind a host collection can declare, including the kinds
/// ranking must ignore.
pub const ALL_SCHEMA_KINDS: [&str; 12] = [
    "checkbox",
    "date",
    "file",
    "latlong",
    "menu",
    "multimenu",
    "number",
    "picture",
    "radiobutton",
    "text",
    "textarea",
    "url",
];

/// Build one field definition with a fresh id.
pub fn field(name: &str, kind: &str, required: bool) -> FieldDefinition {
    FieldDefinition {
        id: Uuid::new_v4(),
        name: name.to_string(),
        field_type: kind.to_string(),
        required,
    }
}

/// Build the content value for `field` on one record.
pub fn content(field: &FieldDefinition, record_id: Uuid, value: &str) -> ContentValue {
    ContentValue {
        field_id: field.id,
        record_id,
        content: value.to_string(),
    }
}

/// An optional field of every schema kind, each holding a value naming its
/// own kind, paired with one record's content rows.
pub fn mixed_kind_record(record_id: Uuid) -> (Vec<FieldDefinition>, Vec<ContentValue>) {
    let fields: Vec<FieldDefinition> = ALL_SCHEMA_KINDS
        .iter()
        .map(|kind| field(&format!("{}-field", kind), kind, false))
        .collect();
    let contents = fields
        .iter()
        .map(|f| content(f, record_id, &format!("{} value", f.field_type)))
        .collect();
    (fields, contents)
}
