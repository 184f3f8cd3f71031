use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, Snippet};
use crate::error::Result;
use crate::model::SnippetKind;

/// Pulls one source snippet out of a record. Unknown ids and records
/// without the requested snippet degrade to a warning.
pub fn run(catalog: &Catalog, id: &str, kind: SnippetKind) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let record = match catalog.find_by_id(id) {
        Some(record) => record,
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No component with id \"{}\" in the catalog.",
                id
            )));
            return Ok(result);
        }
    };

    let code = record.snippet(kind);
    if code.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} has no {} snippet.",
            record.name,
            kind.label()
        )));
        return Ok(result);
    }

    Ok(result.with_snippet(Snippet {
        component: record.name.clone(),
        kind,
        code: code.to_string(),
    }))
}
