use std::collections::BTreeSet;

use crate::model::destination::StringOrList;

pub const DIET_VEGETARIAN: &str = "vegetarian";
pub const DIET_NON_VEGETARIAN: &str = "non-vegetarian";
pub const DIET_HALAL: &str = "halal";
pub const DIET_OTHER: &str = "other";

/// Splits a comma separated string or list into trimmed, non-empty terms.
fn terms(input: Option<StringOrList>) -> Vec<String> {
    let raw = match input {
        None => Vec::new(),
        Some(StringOrList::Text(text)) => text.split(',').map(str::to_string).collect(),
        Some(StringOrList::List(items)) => items,
    };

    raw.into_iter()
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Normalizes signature dish tags into a sorted set of trimmed strings.
pub fn dish_tags(input: Option<StringOrList>) -> Vec<String> {
    terms(input)
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Maps one dietary term onto the fixed vocabulary.
///
/// Unrecognized terms land in `other`; nothing is rejected.
pub fn dietary_term(term: &str) -> &'static str {
    let key = term.trim().to_lowercase().replace(['_', ' '], "-");

    match key.as_str() {
        "vegetarian" | "veg" | "veggie" => DIET_VEGETARIAN,
        "non-vegetarian" | "nonvegetarian" | "non-veg" | "nonveg" => DIET_NON_VEGETARIAN,
        "halal" => DIET_HALAL,
        _ => DIET_OTHER,
    }
}

/// Normalizes a dietary list, deduplicating mapped terms.
pub fn dietary_info(input: Option<StringOrList>) -> Vec<String> {
    terms(input)
        .iter()
        .map(|term| dietary_term(term))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Trims every entry of a plain string list, dropping blanks.
pub fn string_list(items: Vec<String>) -> Vec<String> {
    terms(Some(StringOrList::List(items)))
}

/// Trims an optional string, turning blank into `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
