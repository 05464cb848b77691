//! Search document output types.
//!
//! The ranking engine fills a fixed-arity document: a mandatory title and
//! content, plus up to two supplementary descriptions. The caller attaches
//! the result to whatever index format the host search system uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four fixed output positions of the target search document schema.
///
/// `title` and `content` are always present; a record that cannot fill
/// both is not indexable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSlots {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description2: Option<String>,
}

impl SearchSlots {
    /// Slot values in slot order, skipping unfilled optional slots.
    pub fn values(&self) -> Vec<&str> {
        let mut values = vec![self.title.as_str(), self.content.as_str()];
        values.extend(self.description1.as_deref());
        values.extend(self.description2.as_deref());
        values
    }
}

/// Caller-supplied metadata about the record being indexed.
///
/// The engine never fetches any of this; it only copies it onto the
/// assembled document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordContext {
    pub record_id: Uuid,
    pub collection_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub created_at_utc: DateTime<Utc>,
    pub modified_at_utc: DateTime<Utc>,
}

/// A fully assembled indexing payload: slot values plus record metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDocument {
    pub record_id: Uuid,
    pub collection_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description2: Option<String>,
    pub modified_at_utc: DateTime<Utc>,
    /// True when the record was created after the caller's last index
    /// pass, so the host inserts instead of updating.
    pub is_new: bool,
}
