//! Filter-option vocabularies and frequency tallies.
//!
//! Vocabularies are the sorted distinct values a field takes across the full
//! collection. Deduplication is exact (case-sensitive) and ordering is plain
//! string ordering, so `"1800"` sorts before `"1900"` and also before `"2"`.

use crate::model::{InfoField, Property};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Distinct present values of `field`, sorted ascending.
pub fn unique_values(properties: &[Property], field: InfoField) -> Vec<String> {
    properties
        .iter()
        .filter_map(|p| field.get(&p.property_info))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Approximates the street name by dropping the first two whitespace
/// separated tokens of an address.
///
/// This is a positional guess, not an address parser: `"12 Elm Street"`
/// yields `"Street"`, `"Elm Street"` yields `""` and `"12 N Main St"` yields
/// `"Main St"`.
pub fn street_name(address: &str) -> String {
    address
        .split_whitespace()
        .skip(2)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Distinct street names over every record with an address, sorted.
///
/// Addresses too short to survive [`street_name`] contribute `""`.
pub fn street_names(properties: &[Property]) -> Vec<String> {
    properties
        .iter()
        .filter_map(|p| p.property_info.address())
        .map(street_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The option lists handed to a renderer to populate its filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabularies {
    pub streets: Vec<String>,
    pub styles: Vec<String>,
    pub conditions: Vec<String>,
    pub construction_dates: Vec<String>,
}

impl Vocabularies {
    pub fn derive(properties: &[Property]) -> Self {
        Self {
            streets: street_names(properties),
            styles: unique_values(properties, InfoField::StyleForm),
            conditions: unique_values(properties, InfoField::Condition),
            construction_dates: unique_values(properties, InfoField::ConstructionDate),
        }
    }
}

/// A value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub value: String,
    pub count: usize,
}

/// Counts values, most common first. Ties keep first-appearance order.
pub fn tally<I, S>(values: I) -> Vec<Tally>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for value in values {
        let value = value.into();
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut tallies: Vec<Tally> = order
        .into_iter()
        .map(|value| {
            let count = counts.get(&value).copied().unwrap_or_default();
            Tally { value, count }
        })
        .collect();
    // stable sort keeps first-appearance order among equal counts
    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies
}

/// Frequency of each present value of `field`.
pub fn tally_field(properties: &[Property], field: InfoField) -> Vec<Tally> {
    tally(properties.iter().filter_map(|p| field.get(&p.property_info)))
}

/// Frequency of each street name, skipping addresses too short to name one.
pub fn tally_streets(properties: &[Property]) -> Vec<Tally> {
    tally(
        properties
            .iter()
            .filter_map(|p| p.property_info.address())
            .map(street_name)
            .filter(|street| !street.is_empty()),
    )
}
