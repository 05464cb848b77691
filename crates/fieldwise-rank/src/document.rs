//! Search document assembly.
//!
//! The extraction pipeline here is the crate's public entry point: parse
//! the entry template, rank the record's field values, fill the document
//! slots, then attach caller-supplied record metadata.

use chrono::{DateTime, Utc};
use fieldwise_core::{
    ContentValue, FieldDefinition, RecordContext, Result, SearchDocument, SearchSlots,
};
use tracing::debug;
use uuid::Uuid;

use crate::rank::rank_fields;
use crate::slots::assign_slots;
use crate::template::template_field_order;

/// Extract the search slot values for one record.
///
/// Composes the full pipeline: template order parsing, filtering,
/// annotation, ranking, and slot assignment. Pure and deterministic;
/// identical inputs always produce identical output or the same typed
/// failure.
pub fn extract_slots(
    record_id: Uuid,
    fields: &[FieldDefinition],
    contents: &[ContentValue],
    template: &str,
) -> Result<SearchSlots> {
    let template_order = template_field_order(template);
    let ranked = rank_fields(fields, contents, &template_order);
    let slots = assign_slots(record_id, ranked)?;

    debug!(
        record_id = %record_id,
        field_count = fields.len(),
        template_fields = template_order.len(),
        "extracted search slots"
    );
    Ok(slots)
}

/// Attach record metadata to extracted slot values.
///
/// `last_indexed` is the time of the caller's last successful index pass;
/// a record created after it is flagged new so the host inserts rather
/// than updates.
pub fn build_document(
    ctx: &RecordContext,
    slots: SearchSlots,
    last_indexed: Option<DateTime<Utc>>,
) -> SearchDocument {
    let is_new = last_indexed.is_some_and(|t| t < ctx.created_at_utc);
    SearchDocument {
        record_id: ctx.record_id,
        collection_id: ctx.collection_id,
        user_id: ctx.user_id,
        title: slots.title,
        content: slots.content,
        description1: slots.description1,
        description2: slots.description2,
        modified_at_utc: ctx.modified_at_utc,
        is_new,
    }
}
