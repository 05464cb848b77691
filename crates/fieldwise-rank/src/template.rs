//! Entry-layout template parsing.
//!
//! Collection administrators lay out record entries with an HTML template
//! whose table rows place `[[Field Name]]` tokens where a field's value
//! renders. The declared row order is the administrator's ordering of the
//! fields, so ranking uses it as a tie-break.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, trace};

/// Matches one `[[Field Name]]` placeholder token.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[(.+?)\]\]").expect("placeholder pattern is a valid regex")
});

/// Recover the administrator-declared field order from entry-layout markup.
///
/// Walks template rows in document order, collects each row's descendant
/// text, and extracts the bare field names from `[[...]]` tokens. The
/// first occurrence of a name wins; later duplicates are dropped, not
/// reordered. Token names that match no real field are kept; the parser
/// knows nothing about the field set, and unknown names simply never match
/// during ranking.
///
/// Malformed or partial markup never fails: the html5ever tree builder
/// recovers what it can, and a template with no parseable rows yields an
/// empty order, which only weakens tie-breaking.
pub fn template_field_order(markup: &str) -> Vec<String> {
    if markup.trim().is_empty() {
        return Vec::new();
    }

    let doc = Html::parse_fragment(markup);
    let Ok(rows) = Selector::parse("tr") else {
        return Vec::new();
    };

    let mut order: Vec<String> = Vec::new();
    for row in doc.select(&rows) {
        let text: String = row.text().collect();
        for cap in TOKEN.captures_iter(&text) {
            let name = cap[1].trim();
            if name.is_empty() || order.iter().any(|seen| seen == name) {
                continue;
            }
            trace!(field = name, position = order.len(), "template token");
            order.push(name.to_string());
        }
    }

    debug!(template_fields = order.len(), "parsed entry template order");
    order
}
