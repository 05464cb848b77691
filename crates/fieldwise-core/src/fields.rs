//! Field schema and content types.
//!
//! A collection's record schema is a list of named, typed field
//! definitions; each record instance stores one raw content value per
//! field. Definitions are immutable for the duration of a ranking call and
//! are referenced, never owned, by content values.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Field kinds whose content contributes to the search document.
///
/// Host schemas also allow kinds that are never indexed (`file`,
/// `picture`, `latlong`, `date`, `number`). Those have no variant here and
/// [`FieldType::from_name`] rejects them, so every function over
/// `FieldType` is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line free text.
    Text,
    /// Multi-line rich text; stored content may contain HTML markup.
    Textarea,
    /// Single choice from a dropdown list.
    Menu,
    /// Single choice from a radio group.
    RadioButton,
    /// Multiple choices from checkboxes.
    Checkbox,
    /// Multiple choices from a multi-select list.
    MultiMenu,
    /// Hyperlink.
    Url,
}

impl FieldType {
    /// Parse a schema type name.
    ///
    /// Returns `None` for kinds that are not indexed; callers treat that
    /// as a silent filter, not an error.
    pub fn from_name(name: &str) -> Option<FieldType> {
        match name {
            "text" => Some(FieldType::Text),
            "textarea" => Some(FieldType::Textarea),
            "menu" => Some(FieldType::Menu),
            "radiobutton" => Some(FieldType::RadioButton),
            "checkbox" => Some(FieldType::Checkbox),
            "multimenu" => Some(FieldType::MultiMenu),
            "url" => Some(FieldType::Url),
            _ => None,
        }
    }

    /// Schema type name, as stored by the host platform.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Menu => "menu",
            FieldType::RadioButton => "radiobutton",
            FieldType::Checkbox => "checkbox",
            FieldType::MultiMenu => "multimenu",
            FieldType::Url => "url",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named, typed slot in a collection's record schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Unique within the owning collection.
    pub id: Uuid,
    /// Display name; the join key against parsed template tokens.
    pub name: String,
    /// Raw schema type name as stored by the host platform. Parsed with
    /// [`FieldType::from_name`] during ranking; unsupported kinds are
    /// filtered out, not rejected.
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
}

/// The stored text for one field on one record instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentValue {
    pub field_id: Uuid,
    pub record_id: Uuid,
    /// Unprocessed stored text; may carry the option separator or HTML
    /// markup depending on the field kind.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_supported_kinds() {
        assert_eq!(FieldType::from_name("text"), Some(FieldType::Text));
        assert_eq!(FieldType::from_name("textarea"), Some(FieldType::Textarea));
        assert_eq!(FieldType::from_name("menu"), Some(FieldType::Menu));
        assert_eq!(
            FieldType::from_name("radiobutton"),
            Some(FieldType::RadioButton)
        );
        assert_eq!(FieldType::from_name("checkbox"), Some(FieldType::Checkbox));
        assert_eq!(
            FieldType::from_name("multimenu"),
            Some(FieldType::MultiMenu)
        );
        assert_eq!(FieldType::from_name("url"), Some(FieldType::Url));
    }

    #[test]
    fn test_from_name_rejects_unindexed_kinds() {
        for kind in ["file", "picture", "latlong", "date", "number", ""] {
            assert_eq!(FieldType::from_name(kind), None, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        // Schema type names are stored lowercase; anything else is unknown.
        assert_eq!(FieldType::from_name("Text"), None);
        assert_eq!(FieldType::from_name("URL"), None);
    }

    #[test]
    fn test_name_round_trips_through_from_name() {
        for kind in [
            FieldType::Text,
            FieldType::Textarea,
            FieldType::Menu,
            FieldType::RadioButton,
            FieldType::Checkbox,
            FieldType::MultiMenu,
            FieldType::Url,
        ] {
            assert_eq!(FieldType::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_display_matches_schema_name() {
        assert_eq!(FieldType::RadioButton.to_string(), "radiobutton");
        assert_eq!(FieldType::MultiMenu.to_string(), "multimenu");
    }

    #[test]
    fn test_field_type_serde_uses_schema_names() {
        let json = serde_json::to_string(&FieldType::RadioButton).unwrap();
        assert_eq!(json, "\"radiobutton\"");

        let kind: FieldType = serde_json::from_str("\"multimenu\"").unwrap();
        assert_eq!(kind, FieldType::MultiMenu);
    }

    #[test]
    fn test_field_definition_serde_renames_type() {
        let field = FieldDefinition {
            id: Uuid::nil(),
            name: "Title".to_string(),
            field_type: "text".to_string(),
            required: true,
        };
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"type\":\"text\""));

        let restored: FieldDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.name, "Title");
        assert_eq!(restored.field_type, "text");
        assert!(restored.required);
    }

    #[test]
    fn test_content_value_serde_round_trip() {
        let value = ContentValue {
            field_id: Uuid::new_v4(),
            record_id: Uuid::new_v4(),
            content: "A##B##C".to_string(),
        };
        let json = serde_json::to_string(&value).unwrap();
        let restored: ContentValue = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.field_id, value.field_id);
        assert_eq!(restored.record_id, value.record_id);
        assert_eq!(restored.content, value.content);
    }
}
