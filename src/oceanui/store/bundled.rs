use super::CatalogSource;
use crate::error::Result;
use crate::model::CatalogDoc;

/// The component data shipped inside the binary.
const CATALOG_JSON: &str = include_str!("../data/components.json");

/// The default source: the Ocean UI component set bundled at build time.
#[derive(Debug, Default)]
pub struct BundledSource;

impl CatalogSource for BundledSource {
    fn load(&self) -> Result<CatalogDoc> {
        let doc: CatalogDoc = serde_json::from_str(CATALOG_JSON)?;
        Ok(doc)
    }
}
