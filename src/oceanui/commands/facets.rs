use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;

/// The category and tag lists that populate the filter controls.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let index = catalog.index();
    Ok(CmdResult::default()
        .with_categories(index.categories.clone())
        .with_tags(index.tags.clone()))
}
