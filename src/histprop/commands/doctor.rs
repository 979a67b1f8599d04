use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Property;
use crate::session::Session;
use serde::Serialize;
use std::collections::HashMap;

/// Consistency findings for a loaded dataset. Nothing is repaired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    pub checked: usize,
    /// Positions of records whose `filename` is empty.
    pub empty_filenames: Vec<usize>,
    /// Filenames carried by more than one record, in first-seen order.
    pub duplicate_filenames: Vec<String>,
    /// Filenames of records without an address.
    pub missing_addresses: Vec<String>,
}

impl DoctorReport {
    pub fn inspect(properties: &[Property]) -> Self {
        let mut report = DoctorReport {
            checked: properties.len(),
            ..Default::default()
        };
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (i, property) in properties.iter().enumerate() {
            if property.filename.is_empty() {
                report.empty_filenames.push(i);
                continue;
            }

            let count = seen.entry(property.filename.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                report.duplicate_filenames.push(property.filename.clone());
            }

            if property.property_info.address().is_none() {
                report.missing_addresses.push(property.filename.clone());
            }
        }

        report
    }

    pub fn is_clean(&self) -> bool {
        self.empty_filenames.is_empty()
            && self.duplicate_filenames.is_empty()
            && self.missing_addresses.is_empty()
    }
}

pub fn run(session: &Session) -> Result<CmdResult> {
    let report = DoctorReport::inspect(session.all());
    let mut result = CmdResult::default().with_total(report.checked);

    if report.is_clean() {
        result.add_message(CmdMessage::success(format!(
            "No issues found in {} properties.",
            report.checked
        )));
    } else {
        result.add_message(CmdMessage::warning("Dataset issues found:"));
        if !report.empty_filenames.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "  - {} record(s) without a filename.",
                report.empty_filenames.len()
            )));
        }
        if !report.duplicate_filenames.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "  - Duplicate filename(s): {}.",
                report.duplicate_filenames.join(", ")
            )));
        }
        if !report.missing_addresses.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "  - {} record(s) without an address.",
                report.missing_addresses.len()
            )));
        }
    }

    Ok(result.with_report(report))
}
