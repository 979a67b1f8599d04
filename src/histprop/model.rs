//! Core data types: survey records and the filters applied to them.
//!
//! Records mirror the JSON produced by the survey extraction: every
//! `property_info` field is optional free text. A value counts as *present*
//! only when it is non-null and non-empty, so callers never see `""` through
//! the accessors here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returns the value if it is non-null and non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl PropertyMetadata {
    pub fn recorded_by(&self) -> Option<&str> {
        present(&self.recorded_by)
    }

    pub fn organization(&self) -> Option<&str> {
        present(&self.organization)
    }

    pub fn date(&self) -> Option<&str> {
        present(&self.date)
    }
}

/// The flat survey form. Field names match the dataset's JSON keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessors_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usgs_quad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historic_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architect_builder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbuildings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_alterations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acreage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
}

impl PropertyInfo {
    pub fn get(&self, field: InfoField) -> Option<&str> {
        field.get(self)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.address)
    }

    pub fn historic_name(&self) -> Option<&str> {
        present(&self.historic_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub style: String,
}

/// One surveyed building. `filename` is the unique key across a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub filename: String,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub metadata: PropertyMetadata,
    #[serde(default)]
    pub property_info: PropertyInfo,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    #[serde(default)]
    pub architectural_description: String,
    #[serde(default)]
    pub historical_narrative: String,
    #[serde(default)]
    pub bibliography: String,
}

impl Property {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Display title: the historic name, falling back to the address and
    /// finally the filename.
    pub fn title(&self) -> &str {
        self.property_info
            .historic_name()
            .or_else(|| self.property_info.address())
            .unwrap_or(&self.filename)
    }
}

/// The `property_info` fields, addressable without string indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoField {
    AssessorsNumber,
    UsgsQuad,
    Area,
    FormNumber,
    TownCity,
    Place,
    Address,
    HistoricName,
    Uses,
    ConstructionDate,
    Source,
    StyleForm,
    ArchitectBuilder,
    ExteriorMaterial,
    Outbuildings,
    MajorAlterations,
    Condition,
    Moved,
    Acreage,
    Setting,
}

impl InfoField {
    pub const ALL: [InfoField; 20] = [
        InfoField::AssessorsNumber,
        InfoField::UsgsQuad,
        InfoField::Area,
        InfoField::FormNumber,
        InfoField::TownCity,
        InfoField::Place,
        InfoField::Address,
        InfoField::HistoricName,
        InfoField::Uses,
        InfoField::ConstructionDate,
        InfoField::Source,
        InfoField::StyleForm,
        InfoField::ArchitectBuilder,
        InfoField::ExteriorMaterial,
        InfoField::Outbuildings,
        InfoField::MajorAlterations,
        InfoField::Condition,
        InfoField::Moved,
        InfoField::Acreage,
        InfoField::Setting,
    ];

    /// The JSON key of the field.
    pub fn name(&self) -> &'static str {
        match self {
            InfoField::AssessorsNumber => "assessors_number",
            InfoField::UsgsQuad => "usgs_quad",
            InfoField::Area => "area",
            InfoField::FormNumber => "form_number",
            InfoField::TownCity => "town_city",
            InfoField::Place => "place",
            InfoField::Address => "address",
            InfoField::HistoricName => "historic_name",
            InfoField::Uses => "uses",
            InfoField::ConstructionDate => "construction_date",
            InfoField::Source => "source",
            InfoField::StyleForm => "style_form",
            InfoField::ArchitectBuilder => "architect_builder",
            InfoField::ExteriorMaterial => "exterior_material",
            InfoField::Outbuildings => "outbuildings",
            InfoField::MajorAlterations => "major_alterations",
            InfoField::Condition => "condition",
            InfoField::Moved => "moved",
            InfoField::Acreage => "acreage",
            InfoField::Setting => "setting",
        }
    }

    /// Reads the field from a record, yielding only present values.
    pub fn get(self, info: &PropertyInfo) -> Option<&str> {
        let raw = match self {
            InfoField::AssessorsNumber => &info.assessors_number,
            InfoField::UsgsQuad => &info.usgs_quad,
            InfoField::Area => &info.area,
            InfoField::FormNumber => &info.form_number,
            InfoField::TownCity => &info.town_city,
            InfoField::Place => &info.place,
            InfoField::Address => &info.address,
            InfoField::HistoricName => &info.historic_name,
            InfoField::Uses => &info.uses,
            InfoField::ConstructionDate => &info.construction_date,
            InfoField::Source => &info.source,
            InfoField::StyleForm => &info.style_form,
            InfoField::ArchitectBuilder => &info.architect_builder,
            InfoField::ExteriorMaterial => &info.exterior_material,
            InfoField::Outbuildings => &info.outbuildings,
            InfoField::MajorAlterations => &info.major_alterations,
            InfoField::Condition => &info.condition,
            InfoField::Moved => &info.moved,
            InfoField::Acreage => &info.acreage,
            InfoField::Setting => &info.setting,
        };
        present(raw)
    }
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InfoField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        InfoField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| format!("Unknown property field: {}", s))
    }
}

/// The sparse set of active search/filter constraints.
///
/// A `None` or empty value imposes no constraint on that dimension. Edits
/// produce a new value through the `with_*` methods; the engine never mutates
/// the filters it is handed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_date: Option<String>,
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(self, term: impl Into<Option<String>>) -> Self {
        Self {
            search_term: normalize(term.into()),
            ..self
        }
    }

    pub fn with_street(self, street: impl Into<Option<String>>) -> Self {
        Self {
            street: normalize(street.into()),
            ..self
        }
    }

    pub fn with_style(self, style: impl Into<Option<String>>) -> Self {
        Self {
            style: normalize(style.into()),
            ..self
        }
    }

    pub fn with_condition(self, condition: impl Into<Option<String>>) -> Self {
        Self {
            condition: normalize(condition.into()),
            ..self
        }
    }

    pub fn with_construction_date(self, date: impl Into<Option<String>>) -> Self {
        Self {
            construction_date: normalize(date.into()),
            ..self
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        present(&self.search_term)
    }

    pub fn street(&self) -> Option<&str> {
        present(&self.street)
    }

    pub fn style(&self) -> Option<&str> {
        present(&self.style)
    }

    pub fn condition(&self) -> Option<&str> {
        present(&self.condition)
    }

    pub fn construction_date(&self) -> Option<&str> {
        present(&self.construction_date)
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.street().is_none()
            && self.style().is_none()
            && self.condition().is_none()
            && self.construction_date().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_treats_empty_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("Federal".into())), Some("Federal"));
    }

    #[test]
    fn deserializes_sparse_record() {
        let json = r#"{
            "filename": "HillsideAve_17",
            "property_info": { "address": "17 Hillside Ave", "condition": "" }
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.filename, "HillsideAve_17");
        assert_eq!(property.property_info.address(), Some("17 Hillside Ave"));
        assert_eq!(property.property_info.get(InfoField::Condition), None);
        assert!(property.images.is_empty());
        assert_eq!(property.historical_narrative, "");
    }

    #[test]
    fn filename_is_required() {
        let json = r#"{ "property_info": {} }"#;
        assert!(serde_json::from_str::<Property>(json).is_err());
    }

    #[test]
    fn title_falls_back_to_address_then_filename() {
        let mut property = Property::new("Elm_12");
        assert_eq!(property.title(), "Elm_12");

        property.property_info.address = Some("12 Elm Street".into());
        assert_eq!(property.title(), "12 Elm Street");

        property.property_info.historic_name = Some("Peter Tufts House".into());
        assert_eq!(property.title(), "Peter Tufts House");
    }

    #[test]
    fn info_field_parses_json_and_kebab_names() {
        assert_eq!(
            "style_form".parse::<InfoField>().unwrap(),
            InfoField::StyleForm
        );
        assert_eq!(
            "construction-date".parse::<InfoField>().unwrap(),
            InfoField::ConstructionDate
        );
        assert!("roof".parse::<InfoField>().is_err());
    }

    #[test]
    fn info_field_names_round_trip() {
        for field in InfoField::ALL {
            assert_eq!(field.name().parse::<InfoField>().unwrap(), field);
        }
    }

    #[test]
    fn builder_normalizes_cleared_values() {
        let filters = SearchFilters::new()
            .with_style("Colonial".to_string())
            .with_street(String::new());
        assert_eq!(filters.style(), Some("Colonial"));
        assert_eq!(filters.street, None);

        let cleared = filters.with_style(None);
        assert!(cleared.is_empty());
    }

    #[test]
    fn literal_empty_strings_count_as_no_filter() {
        let filters = SearchFilters {
            search_term: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.is_empty());
    }
}
