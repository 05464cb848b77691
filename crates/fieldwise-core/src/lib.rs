//! # fieldwise-core
//!
//! Core types for the fieldwise field ranking engine.
//!
//! This crate provides the data model shared by the fieldwise crates: field
//! schema types, raw content values, the search document output types, and
//! the engine's error type.

pub mod document;
pub mod error;
pub mod fields;

// Re-export commonly used types at crate root
pub use document::{RecordContext, SearchDocument, SearchSlots};
pub use error::{Error, Result};
pub use fields::{ContentValue, FieldDefinition, FieldType};
