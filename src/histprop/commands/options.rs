use crate::commands::CmdResult;
use crate::error::{HistPropError, Result};
use crate::model::InfoField;
use crate::session::Session;
use crate::vocab;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A field the option lists can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsField {
    /// Street names derived from addresses.
    Street,
    Info(InfoField),
}

impl fmt::Display for OptionsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsField::Street => write!(f, "street"),
            OptionsField::Info(field) => write!(f, "{}", field),
        }
    }
}

impl FromStr for OptionsField {
    type Err = HistPropError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "street" | "streets" => Ok(OptionsField::Street),
            "style" | "styles" => Ok(OptionsField::Info(InfoField::StyleForm)),
            "condition" | "conditions" => Ok(OptionsField::Info(InfoField::Condition)),
            "date" | "dates" | "built" => Ok(OptionsField::Info(InfoField::ConstructionDate)),
            other => other
                .parse()
                .map(OptionsField::Info)
                .map_err(HistPropError::Api),
        }
    }
}

/// A single labelled option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionList {
    pub field: String,
    pub values: Vec<String>,
}

pub fn run(session: &Session, field: Option<OptionsField>) -> Result<CmdResult> {
    let result = CmdResult::default().with_total(session.total());
    match field {
        None => Ok(result.with_vocabularies(session.vocabularies().clone())),
        Some(field) => {
            let values = match field {
                OptionsField::Street => session.vocabularies().streets.clone(),
                OptionsField::Info(info) => vocab::unique_values(session.all(), info),
            };
            Ok(result.with_options(OptionList {
                field: field.to_string(),
                values,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SourceFixture;

    fn session() -> Session {
        Session::with_properties(
            SourceFixture::elm_and_oak()
                .with_surveyed("Main_3", "3 Main St", "Good", "1890")
                .with_address("Elm_2", "Elm Street")
                .properties,
        )
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("streets".parse::<OptionsField>().unwrap(), OptionsField::Street);
        assert_eq!(
            "built".parse::<OptionsField>().unwrap(),
            OptionsField::Info(InfoField::ConstructionDate)
        );
        assert_eq!(
            "Style".parse::<OptionsField>().unwrap(),
            OptionsField::Info(InfoField::StyleForm)
        );
        assert_eq!(
            "architect-builder".parse::<OptionsField>().unwrap(),
            OptionsField::Info(InfoField::ArchitectBuilder)
        );
        assert!("colour".parse::<OptionsField>().is_err());
    }

    #[test]
    fn without_field_returns_all_vocabularies() {
        let result = run(&session(), None).unwrap();
        let vocab = result.vocabularies.unwrap();
        assert_eq!(vocab.streets, vec!["", "Ave", "St", "Street"]);
        assert_eq!(vocab.styles, vec!["Colonial", "Victorian"]);
        assert_eq!(vocab.conditions, vec!["Good"]);
        assert_eq!(vocab.construction_dates, vec!["1890"]);
        assert!(result.options.is_none());
    }

    #[test]
    fn with_field_returns_one_list() {
        let result = run(&session(), Some(OptionsField::Info(InfoField::StyleForm))).unwrap();
        let options = result.options.unwrap();
        assert_eq!(options.field, "style_form");
        assert_eq!(options.values, vec!["Colonial", "Victorian"]);
    }

    #[test]
    fn street_list_matches_vocabulary() {
        let result = run(&session(), Some(OptionsField::Street)).unwrap();
        assert_eq!(result.options.unwrap().values, vec!["", "Ave", "St", "Street"]);
    }
}
