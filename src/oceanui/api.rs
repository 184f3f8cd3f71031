//! # API facade
//!
//! The single entry point for catalog operations, regardless of the client.
//! The facade loads the catalog once at construction (a malformed source is
//! fatal here and nowhere else), dispatches to the command layer, and hands
//! back structured [`CmdResult`] values. It never prints, never exits, and
//! holds no mutable state — every query against it is independent.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::filter::FilterState;
use crate::model::SnippetKind;
use crate::store::CatalogSource;

pub struct CatalogApi {
    catalog: Catalog,
}

impl CatalogApi {
    /// Builds the API over a source, performing the one-time catalog load.
    pub fn open<S: CatalogSource>(source: &S) -> Result<Self> {
        Ok(Self {
            catalog: Catalog::open(source)?,
        })
    }

    pub fn browse(&self, state: &FilterState) -> Result<commands::CmdResult> {
        commands::browse::run(&self.catalog, state)
    }

    pub fn show(&self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.catalog, id)
    }

    pub fn facets(&self) -> Result<commands::CmdResult> {
        commands::facets::run(&self.catalog)
    }

    pub fn snippet(&self, id: &str, kind: SnippetKind) -> Result<commands::CmdResult> {
        commands::snippet::run(&self.catalog, id, kind)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Snippet};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::model::CatalogDoc;
    use crate::store::bundled::BundledSource;

    struct DocSource(CatalogDoc);

    impl CatalogSource for DocSource {
        fn load(&self) -> Result<CatalogDoc> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn open_loads_the_bundled_catalog() {
        let api = CatalogApi::open(&BundledSource).unwrap();
        assert!(!api.catalog().is_empty());
    }

    #[test]
    fn open_is_fatal_for_malformed_documents() {
        let doc: CatalogDoc = serde_json::from_value(serde_json::json!({
            "components": [
                {"id": "dup", "name": "A", "category": "X"},
                {"id": "dup", "name": "B", "category": "X"},
            ],
        }))
        .unwrap();
        let result = CatalogApi::open(&DocSource(doc));
        assert!(matches!(result, Err(CatalogError::Catalog(_))));
    }

    #[test]
    fn browse_dispatches_to_the_engine() {
        let api = CatalogApi::open(&BundledSource).unwrap();
        let all = api.browse(&FilterState::default()).unwrap();
        assert_eq!(all.listed.len(), api.catalog().len());
    }

    #[test]
    fn show_dispatches_to_lookup() {
        let api = CatalogApi::open(&BundledSource).unwrap();
        assert!(api.show("button-primary").unwrap().record.is_some());
        assert!(api.show("not-a-component").unwrap().record.is_none());
    }
}
