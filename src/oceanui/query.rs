//! # Query-state codec
//!
//! Bidirectional mapping between [`FilterState`] and a URL query string so
//! filters are shareable and bookmarkable. Keys: `q` (free text), `category`
//! (single value), `tags` (comma-joined, AND semantics). A missing key and an
//! empty value both mean "unset", and the `All` sentinel is never serialized.
//!
//! Decoding has no failure modes: any input produces *some* valid state —
//! unreadable pieces fall back to unset rather than erroring.

use crate::filter::{FilterState, ALL_CATEGORIES};
use url::form_urlencoded;

/// Serializes the state, omitting every unset dimension. An unfiltered state
/// encodes to the empty string.
pub fn encode(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    let query = state.query.trim();
    if !query.is_empty() {
        serializer.append_pair("q", query);
    }
    if let Some(category) = state.effective_category() {
        serializer.append_pair("category", category);
    }
    if !state.tags.is_empty() {
        serializer.append_pair("tags", &state.tags.join(","));
    }

    serializer.finish()
}

/// Parses a query string back into a state. A leading `?` is tolerated; for
/// repeated keys the first occurrence wins; empty tag segments are dropped.
pub fn decode(input: &str) -> FilterState {
    let raw = input.strip_prefix('?').unwrap_or(input);

    let mut query = None;
    let mut category = None;
    let mut tags = None;

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "q" if query.is_none() => query = Some(value.trim().to_string()),
            "category" if category.is_none() => category = Some(value.into_owned()),
            "tags" if tags.is_none() => {
                tags = Some(
                    value
                        .split(',')
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>(),
                )
            }
            _ => {}
        }
    }

    let category = category.filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES));

    FilterState {
        query: query.unwrap_or_default(),
        category,
        tags: tags.unwrap_or_default(),
    }
}
