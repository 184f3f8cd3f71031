use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Detail lookup by id. An unknown id is a defined "not found" outcome,
/// not an error.
pub fn run(catalog: &Catalog, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match catalog.find_by_id(id) {
        Some(record) => result = result.with_record(record.clone()),
        None => result.add_message(CmdMessage::warning(format!(
            "No component with id \"{}\" in the catalog.",
            id
        ))),
    }
    Ok(result)
}
