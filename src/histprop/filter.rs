//! # Filter Engine
//!
//! A single linear scan over the collection. A record is kept iff it passes
//! every active constraint of the [`SearchFilters`]; inactive dimensions
//! impose nothing. The output preserves input order, and because the engine
//! is a pure function of its inputs it can be re-applied to its own output
//! without changing the result.
//!
//! A constraint on a field the record lacks always fails: a missing address
//! never passes a street filter by default.

use crate::model::{present, Property, SearchFilters};

/// Lowercased text searched by the free-text filter.
///
/// Joins address, historic name, style, architect/builder and the two
/// narrative blocks with single spaces. Missing fields contribute nothing.
pub fn haystack(property: &Property) -> String {
    let info = &property.property_info;
    [
        present(&info.address),
        present(&info.historic_name),
        present(&info.style_form),
        present(&info.architect_builder),
        Some(property.architectural_description.as_str()),
        Some(property.historical_narrative.as_str()),
    ]
    .iter()
    .map(|part| part.unwrap_or(""))
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

fn contains_ignore_case(value: Option<&str>, needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(&needle.to_lowercase()))
}

/// Whether a single record passes every active constraint.
pub fn matches(property: &Property, filters: &SearchFilters) -> bool {
    let info = &property.property_info;

    if let Some(term) = filters.search_term() {
        if !haystack(property).contains(&term.to_lowercase()) {
            return false;
        }
    }

    if let Some(street) = filters.street() {
        if !contains_ignore_case(present(&info.address), street) {
            return false;
        }
    }

    if let Some(style) = filters.style() {
        if !contains_ignore_case(present(&info.style_form), style) {
            return false;
        }
    }

    if let Some(condition) = filters.condition() {
        if !contains_ignore_case(present(&info.condition), condition) {
            return false;
        }
    }

    // Dates are mostly numeric, so this one stays case-sensitive.
    if let Some(date) = filters.construction_date() {
        if !present(&info.construction_date).is_some_and(|d| d.contains(date)) {
            return false;
        }
    }

    true
}

/// Returns the records passing `filters`, in their original order.
pub fn filter_properties<'a, I>(properties: I, filters: &SearchFilters) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let matched: Vec<&Property> = properties
        .into_iter()
        .filter(|property| matches(property, filters))
        .collect();
    tracing::debug!(?filters, matched = matched.len(), "filtered properties");
    matched
}
