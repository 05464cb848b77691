//! Type-specific content normalization.
//!
//! Raw stored content is shaped by the field kind that produced it:
//! multi-valued choice kinds join their selected option labels with a
//! separator token, rich text carries HTML markup, everything else is
//! plain text. Normalization flattens each into one canonical string.

use fieldwise_core::FieldType;
use scraper::Html;

/// Separator joining selected option labels in stored multi-choice
/// content.
pub const OPTION_SEPARATOR: &str = "##";

/// Produce the canonical text value for one (field kind, raw content)
/// pair.
///
/// Side-effect free and idempotent; empty input never becomes non-empty
/// output.
///
/// # Examples
///
/// ```
/// use fieldwise_core::FieldType;
/// use fieldwise_rank::normalize;
///
/// assert_eq!(normalize(FieldType::MultiMenu, "A##B##C"), "A B C");
/// assert_eq!(normalize(FieldType::Textarea, "<b>World</b>"), "World");
/// assert_eq!(normalize(FieldType::Text, "  Hello "), "Hello");
/// ```
pub fn normalize(field_type: FieldType, raw: &str) -> String {
    match field_type {
        FieldType::Checkbox | FieldType::MultiMenu => join_options(raw),
        FieldType::Textarea => strip_markup(raw),
        FieldType::Text | FieldType::Menu | FieldType::RadioButton | FieldType::Url => {
            raw.trim().to_string()
        }
    }
}

/// Rejoin separator-delimited option labels with single spaces, dropping
/// empty labels.
fn join_options(raw: &str) -> String {
    raw.split(OPTION_SEPARATOR)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip HTML markup from rich-text content, collapsing whitespace runs
/// to single spaces.
///
/// The html5ever tree builder recovers on malformed markup, so this
/// degrades to best-effort stripped text rather than failing.
fn strip_markup(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let text: String = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
