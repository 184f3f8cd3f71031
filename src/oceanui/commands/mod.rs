use crate::model::{ComponentRecord, SnippetKind};

pub mod browse;
pub mod facets;
pub mod show;
pub mod snippet;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A snippet pulled out of a record, ready for display or the clipboard.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub component: String,
    pub kind: SnippetKind,
    pub code: String,
}

/// Structured result of a command. Commands never print; the CLI layer
/// decides how each field is rendered.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ComponentRecord>,
    pub record: Option<ComponentRecord>,
    pub snippet: Option<Snippet>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<ComponentRecord>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_record(mut self, record: ComponentRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
