//! # Rendering Module
//!
//! Turns command results into terminal text through the minijinja templates in
//! `templates/` and the `style` filter backed by [`HISTPROP_THEME`].
//!
//! Layout calculations (width, truncation, wrapping) stay in Rust because they
//! need Unicode-aware processing. Templates choose styles and sections.

use super::styles::{condition_style, names, HISTPROP_THEME};
use super::templates::{
    CONFIG_TEMPLATE, DETAIL_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, OPTIONS_TEMPLATE,
    STATS_TEMPLATE,
};
use histprop::commands::{CmdMessage, MessageLevel, OptionList, StatsReport};
use histprop::config::HistPropConfig;
use histprop::error::Result;
use histprop::model::{InfoField, Property};
use histprop::vocab::{Tally, Vocabularies};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LABEL_WIDTH: usize = 11;
const DETAIL_LABEL_WIDTH: usize = 20;
const SEPARATOR: &str = "================================";

#[derive(Serialize)]
struct RowData {
    label: String,
    value: String,
    style: &'static str,
}

impl RowData {
    fn new(label: &str, width: usize, value: impl Into<String>, style: &'static str) -> Self {
        Self {
            label: format!("{:<width$}", format!("{}:", label), width = width),
            value: value.into(),
            style,
        }
    }
}

#[derive(Serialize)]
struct CardData {
    index: String,
    title: String,
    address: Option<String>,
    rows: Vec<RowData>,
    photos: Option<String>,
}

#[derive(Serialize)]
struct ListData {
    empty: bool,
    summary: String,
    cards: Vec<CardData>,
}

#[derive(Serialize)]
struct SectionData {
    heading: &'static str,
    body: String,
}

#[derive(Serialize)]
struct DetailEntry {
    title: String,
    filename: String,
    rows: Vec<RowData>,
    sections: Vec<SectionData>,
}

#[derive(Serialize)]
struct DetailData {
    separator: &'static str,
    properties: Vec<DetailEntry>,
}

#[derive(Serialize)]
struct OptionSection {
    heading: String,
    values: Vec<String>,
}

#[derive(Serialize)]
struct OptionsData {
    sections: Vec<OptionSection>,
}

#[derive(Serialize)]
struct TallySection {
    heading: &'static str,
    rows: Vec<Tally>,
}

#[derive(Serialize)]
struct StatsData {
    total: usize,
    sections: Vec<TallySection>,
    coverage: Vec<RowData>,
}

#[derive(Serialize)]
struct ConfigItem {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    items: Vec<ConfigItem>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// A template environment with the `style` filter bound to one color choice.
pub struct Renderer {
    env: Environment<'static>,
    line_width: usize,
}

impl Renderer {
    pub fn new(use_color: bool, line_width: usize) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        let theme = HISTPROP_THEME.clone();
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });

        env.add_template("list", LIST_TEMPLATE)?;
        env.add_template("detail", DETAIL_TEMPLATE)?;
        env.add_template("options", OPTIONS_TEMPLATE)?;
        env.add_template("stats", STATS_TEMPLATE)?;
        env.add_template("config", CONFIG_TEMPLATE)?;
        env.add_template("messages", MESSAGES_TEMPLATE)?;

        Ok(Self { env, line_width })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    /// Cards for the listed properties, headed by "Showing N of M properties".
    pub fn property_list(&self, properties: &[Property], total: usize) -> Result<String> {
        // "NNN. " plus the four-space indentation of card rows
        let title_width = self.line_width.saturating_sub(6);
        let cards = properties
            .iter()
            .enumerate()
            .map(|(i, property)| {
                let info = &property.property_info;
                let mut rows = Vec::new();
                if let Some(style) = InfoField::StyleForm.get(info) {
                    rows.push(RowData::new("Style", LABEL_WIDTH, style, names::MUTED));
                }
                if let Some(built) = InfoField::ConstructionDate.get(info) {
                    rows.push(RowData::new("Built", LABEL_WIDTH, built, names::MUTED));
                }
                if let Some(condition) = InfoField::Condition.get(info) {
                    rows.push(RowData::new(
                        "Condition",
                        LABEL_WIDTH,
                        condition,
                        condition_style(condition),
                    ));
                }

                // the address is the title when there is no historic name
                let address = info
                    .historic_name()
                    .and(info.address())
                    .map(|a| truncate_to_width(a, title_width));

                CardData {
                    index: format!("{}.", i + 1),
                    title: truncate_to_width(property.title(), title_width),
                    address,
                    rows,
                    photos: photo_count(property.images.len()),
                }
            })
            .collect();

        let data = ListData {
            empty: properties.is_empty(),
            summary: format!("Showing {} of {} properties", properties.len(), total),
            cards,
        };
        self.render("list", &data)
    }

    /// The expanded detail view: every present field plus the long-form text.
    pub fn property_details(&self, properties: &[Property]) -> Result<String> {
        let body_width = self.line_width.max(20);
        let entries = properties
            .iter()
            .map(|property| {
                let mut rows: Vec<RowData> = InfoField::ALL
                    .iter()
                    .filter_map(|&field| {
                        field.get(&property.property_info).map(|value| {
                            let style = if field == InfoField::Condition {
                                condition_style(value)
                            } else {
                                names::MUTED
                            };
                            RowData::new(field_label(field), DETAIL_LABEL_WIDTH, value, style)
                        })
                    })
                    .collect();

                let meta = &property.metadata;
                let recorded = [
                    ("Recorded by", meta.recorded_by()),
                    ("Organization", meta.organization()),
                    ("Date", meta.date()),
                ];
                for (label, value) in recorded {
                    if let Some(value) = value {
                        rows.push(RowData::new(label, DETAIL_LABEL_WIDTH, value, names::MUTED));
                    }
                }
                if !property.images.is_empty() {
                    rows.push(RowData::new(
                        "Photos",
                        DETAIL_LABEL_WIDTH,
                        property.images.len().to_string(),
                        names::COUNT,
                    ));
                }

                let sections = [
                    ("Architectural Description", &property.architectural_description),
                    ("Historical Narrative", &property.historical_narrative),
                    ("Bibliography", &property.bibliography),
                ]
                .into_iter()
                .filter(|(_, body)| !body.trim().is_empty())
                .map(|(heading, body)| SectionData {
                    heading,
                    body: wrap_to_width(body.trim(), body_width),
                })
                .collect();

                DetailEntry {
                    title: property.title().to_string(),
                    filename: property.filename.clone(),
                    rows,
                    sections,
                }
            })
            .collect();

        let data = DetailData {
            separator: SEPARATOR,
            properties: entries,
        };
        self.render("detail", &data)
    }

    pub fn vocabularies(&self, vocab: &Vocabularies) -> Result<String> {
        let sections = vec![
            option_section("Streets", &vocab.streets),
            option_section("Styles", &vocab.styles),
            option_section("Conditions", &vocab.conditions),
            option_section("Construction dates", &vocab.construction_dates),
        ];
        self.render("options", &OptionsData { sections })
    }

    pub fn option_list(&self, options: &OptionList) -> Result<String> {
        let heading = match options.field.parse::<InfoField>() {
            Ok(field) => field_label(field).to_string(),
            Err(_) => "Streets".to_string(),
        };
        let sections = vec![option_section(&heading, &options.values)];
        self.render("options", &OptionsData { sections })
    }

    pub fn stats(&self, report: &StatsReport) -> Result<String> {
        let ratio = |n: usize| format!("{}/{}", n, report.total);
        let data = StatsData {
            total: report.total,
            sections: vec![
                TallySection {
                    heading: "Properties by street:",
                    rows: report.streets.clone(),
                },
                TallySection {
                    heading: "Architectural styles:",
                    rows: report.styles.clone(),
                },
                TallySection {
                    heading: "Construction dates:",
                    rows: report.construction_dates.clone(),
                },
                TallySection {
                    heading: "Property conditions:",
                    rows: report.conditions.clone(),
                },
            ],
            coverage: vec![
                RowData::new("Properties with images", 0, ratio(report.with_images), names::COUNT),
                RowData::new(
                    "Properties with architectural descriptions",
                    0,
                    ratio(report.with_architectural_description),
                    names::COUNT,
                ),
                RowData::new(
                    "Properties with historical narratives",
                    0,
                    ratio(report.with_historical_narrative),
                    names::COUNT,
                ),
            ],
        };
        self.render("stats", &data)
    }

    pub fn config(&self, config: &HistPropConfig) -> Result<String> {
        let items = config
            .list_all()
            .into_iter()
            .map(|(key, value)| ConfigItem { key, value })
            .collect();
        self.render("config", &ConfigData { items })
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String> {
        if messages.is_empty() {
            return Ok(String::new());
        }
        let messages = messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect();
        self.render("messages", &MessagesData { messages })
    }
}

fn option_section(heading: &str, values: &[String]) -> OptionSection {
    OptionSection {
        heading: heading.to_string(),
        values: values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    "\"\"".to_string()
                } else {
                    v.clone()
                }
            })
            .collect(),
    }
}

fn photo_count(n: usize) -> Option<String> {
    match n {
        0 => None,
        1 => Some("1 photo".to_string()),
        n => Some(format!("{} photos", n)),
    }
}

fn field_label(field: InfoField) -> &'static str {
    match field {
        InfoField::AssessorsNumber => "Assessor's number",
        InfoField::UsgsQuad => "USGS quad",
        InfoField::Area => "Area",
        InfoField::FormNumber => "Form number",
        InfoField::TownCity => "Town/City",
        InfoField::Place => "Place",
        InfoField::Address => "Address",
        InfoField::HistoricName => "Historic name",
        InfoField::Uses => "Uses",
        InfoField::ConstructionDate => "Built",
        InfoField::Source => "Source",
        InfoField::StyleForm => "Style",
        InfoField::ArchitectBuilder => "Architect/Builder",
        InfoField::ExteriorMaterial => "Exterior material",
        InfoField::Outbuildings => "Outbuildings",
        InfoField::MajorAlterations => "Major alterations",
        InfoField::Condition => "Condition",
        InfoField::Moved => "Moved",
        InfoField::Acreage => "Acreage",
        InfoField::Setting => "Setting",
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Greedy word wrap by display width. Paragraph breaks are kept.
fn wrap_to_width(text: &str, max_width: usize) -> String {
    let mut out = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > max_width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        out.push(line);
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use histprop::model::PropertyImage;

    fn renderer() -> Renderer {
        Renderer::new(false, 100).unwrap()
    }

    fn property(filename: &str, address: &str) -> Property {
        let mut p = Property::new(filename);
        p.property_info.address = Some(address.to_string());
        p
    }

    #[test]
    fn test_render_empty_list() {
        let output = renderer().property_list(&[], 12).unwrap();
        assert!(output.contains("No properties found"));
        assert!(output.contains("Try adjusting your search criteria"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn test_render_list_summary_and_cards() {
        let mut royall = property("Royall_15", "15 George St");
        royall.property_info.historic_name = Some("Isaac Royall House".into());
        royall.property_info.style_form = Some("Georgian".into());
        royall.property_info.condition = Some("Excellent".into());
        let plain = property("Elm_12", "12 Elm Street");

        let output = renderer().property_list(&[royall, plain], 5).unwrap();

        assert!(output.starts_with("Showing 2 of 5 properties\n"));
        assert!(output.contains("1. Isaac Royall House\n"));
        assert!(output.contains("    15 George St\n"));
        assert!(output.contains("Style:      Georgian"));
        assert!(output.contains("Condition:  Excellent"));
        // address is already the title
        assert!(output.contains("2. 12 Elm Street\n"));
        assert_eq!(output.matches("12 Elm Street").count(), 1);
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_render_list_photo_count() {
        let mut p = property("Wade_253", "253 High Street");
        p.images = vec![PropertyImage::default(), PropertyImage::default()];
        let output = renderer().property_list(&[p], 1).unwrap();
        assert!(output.contains("2 photos"));
    }

    #[test]
    fn test_render_list_with_color() {
        let output = Renderer::new(true, 100)
            .unwrap()
            .property_list(&[property("Elm_12", "12 Elm Street")], 1)
            .unwrap();
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_render_details() {
        let mut p = property("Tufts_350", "350 Riverside Ave");
        p.property_info.architect_builder = Some("Peter Tufts".into());
        p.metadata.recorded_by = Some("Survey Team".into());
        p.historical_narrative = "Built around 1677.".into();

        let output = renderer().property_details(&[p]).unwrap();
        assert!(output.contains("350 Riverside Ave"));
        assert!(output.contains("Tufts_350"));
        assert!(output.contains("Architect/Builder:"));
        assert!(output.contains("Peter Tufts"));
        assert!(output.contains("Recorded by:"));
        assert!(output.contains("Historical Narrative\nBuilt around 1677."));
        assert!(!output.contains("Bibliography"));
    }

    #[test]
    fn test_render_details_separator_between_properties() {
        let output = renderer()
            .property_details(&[property("A_1", "1 A St"), property("B_2", "2 B St")])
            .unwrap();
        assert_eq!(output.matches(SEPARATOR).count(), 1);
    }

    #[test]
    fn test_render_vocabularies() {
        let vocab = Vocabularies {
            streets: vec!["".into(), "Street".into()],
            styles: vec!["Colonial".into()],
            conditions: vec![],
            construction_dates: vec!["1850".into()],
        };
        let output = renderer().vocabularies(&vocab).unwrap();
        assert!(output.contains("Streets\n  \"\"\n  Street\n"));
        assert!(output.contains("Conditions\n  (none)\n"));
        assert!(output.contains("Construction dates\n  1850\n"));
    }

    #[test]
    fn test_render_option_list_heading() {
        let options = OptionList {
            field: "style_form".into(),
            values: vec!["Federal".into()],
        };
        let output = renderer().option_list(&options).unwrap();
        assert_eq!(output, "Style\n  Federal\n");
    }

    #[test]
    fn test_render_stats() {
        let report = StatsReport {
            total: 3,
            streets: vec![Tally {
                value: "Street".into(),
                count: 2,
            }],
            with_images: 1,
            ..Default::default()
        };
        let output = renderer().stats(&report).unwrap();
        assert!(output.starts_with("Total properties: 3\n"));
        assert!(output.contains("Properties by street:\n  Street: 2\n"));
        assert!(output.contains("Architectural styles:\n  (none)\n"));
        assert!(output.contains("Properties with images: 1/3"));
    }

    #[test]
    fn test_render_config() {
        let output = renderer().config(&HistPropConfig::default()).unwrap();
        assert!(output.contains("data_file = json_data/all_properties.json\n"));
        assert!(output.contains("line_width = 100\n"));
    }

    #[test]
    fn test_render_messages() {
        let output = renderer()
            .messages(&[
                CmdMessage::success("No issues found in 2 properties."),
                CmdMessage::error("Property not found: X"),
            ])
            .unwrap();
        assert_eq!(
            output,
            "No issues found in 2 properties.\nProperty not found: X\n"
        );
        assert_eq!(renderer().messages(&[]).unwrap(), "");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("a longer title", 8), "a longe…");
    }

    #[test]
    fn test_wrap_to_width() {
        assert_eq!(wrap_to_width("one two three", 7), "one two\nthree");
        assert_eq!(wrap_to_width("first\nsecond", 80), "first\nsecond");
    }
}
