use super::CatalogSource;
use crate::error::Result;
use crate::model::CatalogDoc;
use std::fs;
use std::path::PathBuf;

/// Loads the catalog document from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<CatalogDoc> {
        let content = fs::read_to_string(&self.path)?;
        let doc: CatalogDoc = serde_json::from_str(&content)?;
        Ok(doc)
    }
}
