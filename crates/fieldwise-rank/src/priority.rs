//! Static type-priority table for field ranking.

use fieldwise_core::FieldType;

/// Ranking weight for a field kind's content.
///
/// Free text carries the most indexable content, bounded single-choice
/// kinds less, multi-valued choice kinds less again, and hyperlinks the
/// least. The contract is the relative order
/// `text > {textarea, menu, radiobutton} > {checkbox, multimenu} > url`;
/// the numeric gaps are arbitrary.
///
/// Total over [`FieldType`]: unsupported schema kinds are filtered out
/// before ranking and never reach this lookup.
pub fn type_priority(field_type: FieldType) -> u8 {
    match field_type {
        FieldType::Text => 30,
        FieldType::Textarea | FieldType::Menu | FieldType::RadioButton => 20,
        FieldType::Checkbox | FieldType::MultiMenu => 10,
        FieldType::Url => 0,
    }
}
