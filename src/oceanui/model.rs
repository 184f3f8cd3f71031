use serde::{Deserialize, Serialize};

/// Documentation for a single component prop. Display-only; nothing
/// validates live values against these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One catalog entry. `id` is a stable slug, unique across the catalog,
/// and is what detail lookups and the demo registry key on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub props: Vec<PropDoc>,
    #[serde(default)]
    pub jsx: String,
    #[serde(default)]
    pub html: String,
}

/// Precomputed facet lists shipped alongside the records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMeta {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The static data source document: `{ components, meta }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDoc {
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
    #[serde(default)]
    pub meta: CatalogMeta,
}

/// Which source snippet of a record to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    Jsx,
    Html,
}

impl SnippetKind {
    pub fn label(&self) -> &'static str {
        match self {
            SnippetKind::Jsx => "JSX",
            SnippetKind::Html => "HTML",
        }
    }
}

impl ComponentRecord {
    pub fn snippet(&self, kind: SnippetKind) -> &str {
        match kind {
            SnippetKind::Jsx => &self.jsx,
            SnippetKind::Html => &self.html,
        }
    }
}
