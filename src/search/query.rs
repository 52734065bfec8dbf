//! Query parsing, matching and ranking.

use super::record::Concept;

/// A normalized, non-blank query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Lowercased, trimmed query as typed. Used for ranking.
    normalized: String,
    /// Whitespace separated words of `normalized`. Used for matching.
    words: Vec<String>,
}

impl Query {
    /// Parse a raw query. Returns `None` when the query is blank.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        let words = normalized.split_whitespace().map(str::to_string).collect();
        Some(Self { normalized, words })
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Every word must occur somewhere in `search_text` (already lowercase).
    pub fn matches(&self, search_text: &str) -> bool {
        self.words.iter().all(|word| search_text.contains(word.as_str()))
    }

    /// Sort key for a matching concept; smaller sorts first.
    ///
    /// First component: the title misses the whole query. Second: the keywords miss it.
    pub fn rank(&self, concept: &Concept) -> (bool, bool) {
        let title_hit = concept.title.to_lowercase().contains(&self.normalized);
        let keyword_hit = concept.keywords.to_lowercase().contains(&self.normalized);
        (!title_hit, !keyword_hit)
    }
}

/// Options for [SearchEngine::search_with_options](super::SearchEngine::search_with_options).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results. `None` returns all of them.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn limited(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}
