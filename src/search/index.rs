//! Immutable search index snapshot.

use super::query::Query;
use super::record::{Concept, ConceptId, SearchField};
use std::collections::HashMap;

/// Fields folded into a concept's search text, in order. The code sample is left out: code
/// identifiers drown out the prose when matching substrings.
pub const SEARCH_FIELDS: [SearchField; 7] = [
    SearchField::Title,
    SearchField::Definition,
    SearchField::Keywords,
    SearchField::LongDescription,
    SearchField::UsageNotes,
    SearchField::Rationale,
    SearchField::Comparisons,
];

/// Derive the search text of a concept.
pub fn search_text(concept: &Concept) -> String {
    SEARCH_FIELDS
        .iter()
        .map(|field| concept.field(*field))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone)]
struct IndexEntry {
    concept: Concept,
    search_text: String,
}

/// Concepts in collection order, each with its search text.
///
/// Built in one go by [SearchIndex::build] and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
    positions: HashMap<ConceptId, usize>,
}

impl SearchIndex {
    pub fn build(concepts: &[Concept]) -> Self {
        let entries: Vec<IndexEntry> = concepts
            .iter()
            .map(|concept| IndexEntry {
                search_text: search_text(concept),
                concept: concept.clone(),
            })
            .collect();

        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            positions.entry(entry.concept.id).or_insert(position);
        }

        Self { entries, positions }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexed concepts, in collection order.
    pub fn concepts(&self) -> impl Iterator<Item = &Concept> + '_ {
        self.entries.iter().map(|entry| &entry.concept)
    }

    /// Search text of the first concept with this id.
    pub fn search_text(&self, id: ConceptId) -> Option<&str> {
        self.positions
            .get(&id)
            .map(|&position| self.entries[position].search_text.as_str())
    }

    /// Matching concepts in ranked order. `None` (a blank query) returns everything as is.
    pub fn search(&self, query: Option<&Query>) -> Vec<&Concept> {
        let Some(query) = query else {
            return self.concepts().collect();
        };

        let mut hits: Vec<&Concept> = self
            .entries
            .iter()
            .filter(|entry| query.matches(&entry.search_text))
            .map(|entry| &entry.concept)
            .collect();
        // Stable: ties keep collection order.
        hits.sort_by_key(|concept| query.rank(concept));
        hits
    }
}
