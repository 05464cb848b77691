//! # fieldwise-rank
//!
//! Field selection and ranking engine for fieldwise.
//!
//! Given one record's field definitions, raw content values, and the
//! collection's entry-layout template, this crate produces the bounded,
//! ordered slot values of a search document:
//! - Entry-template order parsing ([`template`])
//! - Type-specific content normalization ([`normalize`])
//! - Deterministic multi-key ranking ([`rank`])
//! - Fixed-arity slot assignment ([`slots`])
//! - Document assembly with record metadata ([`document`])
//!
//! Everything here is pure and synchronous: no I/O, no shared state, and
//! identical inputs always produce identical output or the same typed
//! failure. Concurrent callers need no coordination.
//!
//! ## Example
//!
//! ```
//! use fieldwise_core::{ContentValue, FieldDefinition};
//! use fieldwise_rank::extract_slots;
//! use uuid::Uuid;
//!
//! let record_id = Uuid::new_v4();
//! let fields = vec![
//!     FieldDefinition {
//!         id: Uuid::new_v4(),
//!         name: "Title".to_string(),
//!         field_type: "text".to_string(),
//!         required: true,
//!     },
//!     FieldDefinition {
//!         id: Uuid::new_v4(),
//!         name: "Notes".to_string(),
//!         field_type: "textarea".to_string(),
//!         required: false,
//!     },
//! ];
//! let contents = vec![
//!     ContentValue {
//!         field_id: fields[0].id,
//!         record_id,
//!         content: "Hello".to_string(),
//!     },
//!     ContentValue {
//!         field_id: fields[1].id,
//!         record_id,
//!         content: "<p>World</p>".to_string(),
//!     },
//! ];
//!
//! let slots = extract_slots(record_id, &fields, &contents, "").unwrap();
//! assert_eq!(slots.title, "Hello");
//! assert_eq!(slots.content, "World");
//! ```

pub mod document;
pub mod normalize;
pub mod priority;
pub mod rank;
pub mod slots;
pub mod template;

// Re-export core types
pub use fieldwise_core::{Error, Result};

pub use document::{build_document, extract_slots};
pub use normalize::{normalize, OPTION_SEPARATOR};
pub use priority::type_priority;
pub use rank::{annotate, filter_supported, rank_fields, sort_ranked, FieldValue, RankedEntry};
pub use slots::{assign_slots, SLOT_COUNT};
pub use template::template_field_order;
