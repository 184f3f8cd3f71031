//! The loaded, immutable catalog and its derived facet index.

use crate::error::{CatalogError, Result};
use crate::model::{CatalogDoc, ComponentRecord};
use crate::store::CatalogSource;
use std::collections::HashSet;

/// Distinct categories and tags across the catalog, in the order the filter
/// controls present them. The order comes from the document's `meta` block;
/// values that appear on records but not in `meta` are appended so the index
/// can never disagree with the record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// The read-only component collection. Built once at startup; a malformed
/// document fails the load outright.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ComponentRecord>,
    index: CatalogIndex,
}

impl Catalog {
    pub fn open<S: CatalogSource>(source: &S) -> Result<Self> {
        Self::from_document(source.load()?)
    }

    pub fn from_document(doc: CatalogDoc) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &doc.components {
            if record.id.trim().is_empty() {
                return Err(CatalogError::Catalog(format!(
                    "component \"{}\" has an empty id",
                    record.name
                )));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::Catalog(format!(
                    "duplicate component id: {}",
                    record.id
                )));
            }
        }

        let index = build_index(&doc);
        Ok(Self {
            records: doc.components,
            index,
        })
    }

    /// Records in source-document order, the default display order.
    pub fn list_all(&self) -> &[ComponentRecord] {
        &self.records
    }

    /// Resolves an id to its record. At most one record can match.
    pub fn find_by_id(&self, id: &str) -> Option<&ComponentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn build_index(doc: &CatalogDoc) -> CatalogIndex {
    let mut categories = doc.meta.categories.clone();
    let mut tags = doc.meta.tags.clone();

    for record in &doc.components {
        if !categories.contains(&record.category) {
            categories.push(record.category.clone());
        }
        for tag in &record.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }

    CatalogIndex { categories, tags }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogMeta;

    fn record(id: &str, category: &str, tags: &[&str]) -> ComponentRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": id,
            "category": category,
            "tags": tags,
        }))
        .unwrap()
    }

    fn doc(components: Vec<ComponentRecord>, meta: CatalogMeta) -> CatalogDoc {
        CatalogDoc { components, meta }
    }

    #[test]
    fn find_by_id_resolves_exactly_one_record() {
        let catalog = Catalog::from_document(doc(
            vec![record("a", "X", &[]), record("b", "Y", &[])],
            CatalogMeta::default(),
        ))
        .unwrap();

        assert_eq!(catalog.find_by_id("b").unwrap().id, "b");
        assert!(catalog.find_by_id("missing").is_none());
    }

    #[test]
    fn duplicate_ids_fail_the_load() {
        let result = Catalog::from_document(doc(
            vec![record("a", "X", &[]), record("a", "Y", &[])],
            CatalogMeta::default(),
        ));
        assert!(matches!(result, Err(CatalogError::Catalog(_))));
    }

    #[test]
    fn empty_ids_fail_the_load() {
        let result = Catalog::from_document(doc(
            vec![record("  ", "X", &[])],
            CatalogMeta::default(),
        ));
        assert!(result.is_err());
    }

    #[test]
    fn list_all_preserves_source_order() {
        let catalog = Catalog::from_document(doc(
            vec![record("c", "X", &[]), record("a", "X", &[]), record("b", "X", &[])],
            CatalogMeta::default(),
        ))
        .unwrap();

        let ids: Vec<&str> = catalog.list_all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn index_keeps_meta_order_and_backfills_from_records() {
        let catalog = Catalog::from_document(doc(
            vec![
                record("a", "Buttons", &["cta"]),
                record("b", "Cards", &["stats", "cta"]),
            ],
            CatalogMeta {
                categories: vec!["Cards".into(), "Buttons".into()],
                tags: vec!["cta".into()],
            },
        ))
        .unwrap();

        // meta order first, then anything meta missed
        assert_eq!(catalog.index().categories, vec!["Cards", "Buttons"]);
        assert_eq!(catalog.index().tags, vec!["cta", "stats"]);
    }

    #[test]
    fn empty_document_is_a_valid_catalog() {
        let catalog = Catalog::from_document(CatalogDoc::default()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.index().categories.is_empty());
    }
}
