//! Deterministic field ranking.
//!
//! Three composable stages: filter out unsupported kinds, annotate each
//! surviving value with its sort keys, stable-sort by the multi-key
//! comparator. Required fields always rank ahead of optional ones; the
//! host schema guarantees a required field is filled, while an optional
//! one may be empty or filler.

use std::cmp::Reverse;
use std::collections::HashMap;

use fieldwise_core::{ContentValue, FieldDefinition, FieldType};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::normalize::normalize;
use crate::priority::type_priority;

/// A content value paired with its (supported) field definition.
#[derive(Debug, Clone)]
pub struct FieldValue<'a> {
    pub field: &'a FieldDefinition,
    pub content: &'a ContentValue,
    pub field_type: FieldType,
}

/// One field value annotated with everything the comparator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub field_name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub priority: u8,
    /// Position in the parsed template order; `None` ranks after every
    /// present position.
    pub template_rank: Option<usize>,
    /// Normalized content value.
    pub value: String,
}

/// Pair each content value with its field definition.
///
/// Values whose field is unknown and values of unsupported kinds are
/// dropped silently; this is a filter, not an error. Output preserves the
/// content input order, which anchors the stable sort downstream.
pub fn filter_supported<'a>(
    fields: &'a [FieldDefinition],
    contents: &'a [ContentValue],
) -> Vec<FieldValue<'a>> {
    let by_id: HashMap<Uuid, &FieldDefinition> = fields.iter().map(|f| (f.id, f)).collect();

    let mut values = Vec::with_capacity(contents.len());
    for content in contents {
        let Some(field) = by_id.get(&content.field_id).copied() else {
            trace!(field_id = %content.field_id, "content value without field definition, skipping");
            continue;
        };
        let Some(field_type) = FieldType::from_name(&field.field_type) else {
            trace!(field = %field.name, kind = %field.field_type, "unsupported field kind, skipping");
            continue;
        };
        values.push(FieldValue {
            field,
            content,
            field_type,
        });
    }
    values
}

/// Annotate surviving values with priority, template position, and the
/// normalized content.
pub fn annotate(values: Vec<FieldValue<'_>>, template_order: &[String]) -> Vec<RankedEntry> {
    values
        .into_iter()
        .map(|fv| RankedEntry {
            field_name: fv.field.name.clone(),
            field_type: fv.field_type,
            required: fv.field.required,
            priority: type_priority(fv.field_type),
            template_rank: template_order.iter().position(|name| *name == fv.field.name),
            value: normalize(fv.field_type, &fv.content.content),
        })
        .collect()
}

/// Stable sort into the final ranking: required before optional, then
/// higher priority, then earlier template position with template-absent
/// entries last. Residual ties keep input order.
pub fn sort_ranked(entries: &mut [RankedEntry]) {
    entries.sort_by_key(|e| {
        (
            Reverse(e.required),
            Reverse(e.priority),
            e.template_rank.unwrap_or(usize::MAX),
        )
    });
}

/// Filter, annotate, and sort one record's field values.
pub fn rank_fields(
    fields: &[FieldDefinition],
    contents: &[ContentValue],
    template_order: &[String],
) -> Vec<RankedEntry> {
    let values = filter_supported(fields, contents);
    let dropped = contents.len() - values.len();

    let mut entries = annotate(values, template_order);
    sort_ranked(&mut entries);

    debug!(
        input_count = contents.len(),
        dropped,
        result_count = entries.len(),
        "field ranking complete"
    );
    entries
}
