use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;

/// Looks records up by `filename` for the expanded detail view.
pub fn run<I: AsRef<str>>(session: &Session, filenames: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_total(session.total());
    let mut found = Vec::with_capacity(filenames.len());

    for name in filenames {
        let name = name.as_ref();
        match session.find(name) {
            Some(property) => found.push(property.clone()),
            None => result.add_message(CmdMessage::error(format!(
                "Property not found: {}",
                name
            ))),
        }
    }

    result.listed = found;
    Ok(result)
}
