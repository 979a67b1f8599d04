use crate::config::HistPropConfig;
use crate::model::Property;
use crate::vocab::Vocabularies;
use serde::Serialize;

pub mod config;
pub mod doctor;
pub mod list;
pub mod options;
pub mod stats;
pub mod view;

pub use doctor::DoctorReport;
pub use options::{OptionList, OptionsField};
pub use stats::StatsReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. UIs decide how to present it.
#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub listed: Vec<Property>,
    /// Size of the full collection the listing was drawn from.
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabularies: Option<Vocabularies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<DoctorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HistPropConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, properties: Vec<Property>) -> Self {
        self.listed = properties;
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_vocabularies(mut self, vocabularies: Vocabularies) -> Self {
        self.vocabularies = Some(vocabularies);
        self
    }

    pub fn with_options(mut self, options: OptionList) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_stats(mut self, stats: StatsReport) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_report(mut self, report: DoctorReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: HistPropConfig) -> Self {
        self.config = Some(config);
        self
    }
}
