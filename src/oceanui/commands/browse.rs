use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FilterState};

pub fn run(catalog: &Catalog, state: &FilterState) -> Result<CmdResult> {
    let listed = filter::apply(catalog.list_all(), state);

    let mut result = CmdResult::default();
    if listed.is_empty() && !catalog.is_empty() {
        result.add_message(CmdMessage::info(
            "No components match the current filters. Try clearing a filter or broadening the search.",
        ));
    }
    Ok(result.with_listed(listed))
}
