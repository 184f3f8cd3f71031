//! # Filter/Search engine
//!
//! Maps `(records, FilterState)` to the ordered subset to display. Three
//! stages run in a fixed order, each narrowing the previous stage's output:
//!
//! 1. category — case-insensitive equality, skipped for the `All` sentinel
//! 2. tags — the record must carry every selected tag (exact, AND)
//! 3. text — fuzzy match over name/category/tags, re-ranked by score
//!
//! The text stage runs last because it is the only stage allowed to reorder;
//! with an empty query the catalog's source order survives untouched. The
//! whole pipeline is a pure function: no state persists between calls, and
//! an empty result is a normal outcome.

use crate::model::ComponentRecord;

/// Reserved category value meaning "no category constraint". Never a real
/// category name.
pub const ALL_CATEGORIES: &str = "All";

/// Minimum similarity for a record to count as a text match. Substring hits
/// score above this floor, so partial typing always ranks ahead of
/// typo-distance matches.
const MATCH_THRESHOLD: f64 = 0.8;

const SUBSTRING_SCORE: f64 = 0.9;

/// The current filter dimensions, derived from the query string on every
/// navigation. Never persisted anywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Trimmed free-text query; empty means no text filter.
    pub query: String,
    /// Selected category; `None` (or the `All` sentinel) means all.
    pub category: Option<String>,
    /// Tags a record must carry, all of them. Empty means no tag filter.
    pub tags: Vec<String>,
}

impl FilterState {
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty() && self.effective_category().is_none() && self.tags.is_empty()
    }

    /// The category constraint with the sentinel resolved away.
    pub fn effective_category(&self) -> Option<&str> {
        match self.category.as_deref() {
            None => None,
            Some(c) if c.is_empty() || c.eq_ignore_ascii_case(ALL_CATEGORIES) => None,
            Some(c) => Some(c),
        }
    }
}

/// Applies the filter stages and returns the matching records, cloned out of
/// the input in result order.
pub fn apply(records: &[ComponentRecord], state: &FilterState) -> Vec<ComponentRecord> {
    let mut list: Vec<ComponentRecord> = records.to_vec();

    if let Some(category) = state.effective_category() {
        let wanted = category.to_lowercase();
        list.retain(|r| r.category.to_lowercase() == wanted);
    }

    if !state.tags.is_empty() {
        list.retain(|r| state.tags.iter().all(|t| r.tags.iter().any(|rt| rt == t)));
    }

    let query = state.query.trim();
    if !query.is_empty() {
        list = rank(list, query);
    }

    list
}

/// Scores each candidate against the query and reorders best-first,
/// dropping everything under the threshold. The sort is stable, so records
/// with equal scores keep their catalog order.
fn rank(candidates: Vec<ComponentRecord>, query: &str) -> Vec<ComponentRecord> {
    let needle = query.to_lowercase();
    let mut scored: Vec<(ComponentRecord, f64)> = candidates
        .into_iter()
        .filter_map(|r| {
            let score = record_score(&r, &needle);
            if score >= MATCH_THRESHOLD {
                Some((r, score))
            } else {
                None
            }
        })
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(r, _)| r).collect()
}

fn record_score(record: &ComponentRecord, needle: &str) -> f64 {
    let mut best = field_score(&record.name, needle).max(field_score(&record.category, needle));
    for tag in &record.tags {
        best = best.max(field_score(tag, needle));
    }
    best
}

/// Exact match beats substring beats typo distance. Multi-word fields are
/// also scored word by word so "buton" still finds "Primary Button".
fn field_score(field: &str, needle: &str) -> f64 {
    let haystack = field.to_lowercase();
    if haystack == needle {
        return 1.0;
    }
    if haystack.contains(needle) {
        return SUBSTRING_SCORE;
    }
    let mut best = strsim::jaro_winkler(needle, &haystack);
    for word in haystack.split_whitespace() {
        best = best.max(strsim::jaro_winkler(needle, word));
    }
    best
}
