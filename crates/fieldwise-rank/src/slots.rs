//! Fixed-arity slot assignment.

use fieldwise_core::{Error, Result, SearchSlots};
use tracing::debug;
use uuid::Uuid;

use crate::rank::RankedEntry;

/// Number of slots in the target search document schema.
pub const SLOT_COUNT: usize = 4;

/// Map the ranked values into the fixed document slots.
///
/// The first two entries fill the mandatory title and content slots; the
/// next two, when present, the optional descriptions. Entries beyond the
/// fourth are discarded. Fewer than two entries fails with
/// [`Error::NotIndexable`], which batch callers treat as a per-record
/// skip.
pub fn assign_slots(record_id: Uuid, ranked: Vec<RankedEntry>) -> Result<SearchSlots> {
    if ranked.len() < 2 {
        debug!(record_id = %record_id, usable = ranked.len(), "record not indexable");
        return Err(Error::NotIndexable {
            record_id,
            usable: ranked.len(),
        });
    }

    let mut values = ranked.into_iter().map(|e| e.value);
    // Length checked above; the fallback never fires.
    let title = values.next().unwrap_or_default();
    let content = values.next().unwrap_or_default();

    Ok(SearchSlots {
        title,
        content,
        description1: values.next(),
        description2: values.next(),
    })
}
