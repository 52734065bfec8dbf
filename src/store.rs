//! In-memory concept collection
//!
//! The store owns the concept list and keeps a [SearchEngine] in sync with it: every mutation
//! (add, update, delete, import) rebuilds the search index exactly once, after the collection
//! has reached its new state. Readers that only need search can hold on to
//! [ConceptStore::engine] and query it from any thread.

use crate::search::{Concept, ConceptId, SearchEngine, SearchOptions};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no concept with id {0}")]
    NotFound(ConceptId),

    #[error("invalid concept data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Default)]
pub struct ConceptStore {
    concepts: Vec<Concept>,
    engine: Arc<SearchEngine>,
}

impl ConceptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with `concepts` as is (ids untouched).
    pub fn with_concepts(concepts: Vec<Concept>) -> Self {
        let store = Self {
            concepts,
            engine: Arc::new(SearchEngine::new()),
        };
        store.reindex();
        store
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn get(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.iter().find(|concept| concept.id == id)
    }

    /// Shared handle on the search engine. It always reflects the latest mutation.
    pub fn engine(&self) -> Arc<SearchEngine> {
        Arc::clone(&self.engine)
    }

    /// Append a concept under a fresh id (one above the current maximum). The id carried by
    /// `concept` is ignored.
    pub fn add(&mut self, mut concept: Concept) -> ConceptId {
        let id = self.max_id() + 1;
        concept.id = id;
        self.concepts.push(concept);
        debug!(id, "concept added");
        self.reindex();
        id
    }

    /// Replace the concept with the same id, keeping its position.
    pub fn update(&mut self, concept: Concept) -> StoreResult<()> {
        let id = concept.id;
        let slot = self
            .concepts
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = concept;
        debug!(id, "concept updated");
        self.reindex();
        Ok(())
    }

    /// Remove a concept, returning it.
    pub fn delete(&mut self, id: ConceptId) -> StoreResult<Concept> {
        let position = self
            .concepts
            .iter()
            .position(|concept| concept.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.concepts.remove(position);
        debug!(id, "concept deleted");
        self.reindex();
        Ok(removed)
    }

    /// Replace the whole collection with `incoming`.
    ///
    /// Concepts with id 0 or an empty title, definition, long description or keyword list are
    /// skipped. An incoming id is kept when it is above every id currently in the store and
    /// not already taken by an earlier incoming concept; otherwise the concept gets a new id
    /// above every id seen. Returns how many concepts were imported.
    pub fn import(&mut self, incoming: Vec<Concept>) -> usize {
        let max_existing = self.max_id();
        let valid: Vec<Concept> = incoming.into_iter().filter(is_importable).collect();
        let incoming_max = valid.iter().map(|c| c.id).max().unwrap_or(0);
        let mut next_free = max_existing.max(incoming_max) + 1;
        let mut taken = HashSet::with_capacity(valid.len());

        let imported: Vec<Concept> = valid
            .into_iter()
            .map(|mut concept| {
                if concept.id <= max_existing || !taken.insert(concept.id) {
                    concept.id = next_free;
                    taken.insert(next_free);
                    next_free += 1;
                }
                concept
            })
            .collect();

        let count = imported.len();
        self.concepts = imported;
        debug!(count, "concepts imported");
        self.reindex();
        count
    }

    /// Import from a JSON array of concepts.
    pub fn import_json(&mut self, json: &str) -> StoreResult<usize> {
        let incoming: Vec<Concept> = serde_json::from_str(json)?;
        Ok(self.import(incoming))
    }

    /// Copy of the collection, in order.
    pub fn export(&self) -> Vec<Concept> {
        self.concepts.clone()
    }

    pub fn export_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.concepts)?)
    }

    pub fn search(&self, query: &str) -> Vec<Concept> {
        self.engine.search(query)
    }

    pub fn search_with_options(&self, query: &str, options: &SearchOptions) -> Vec<Concept> {
        self.engine.search_with_options(query, options)
    }

    fn max_id(&self) -> ConceptId {
        self.concepts.iter().map(|c| c.id).max().unwrap_or(0)
    }

    fn reindex(&self) {
        self.engine.rebuild_index(&self.concepts);
    }
}

fn is_importable(concept: &Concept) -> bool {
    concept.id != 0
        && !concept.title.is_empty()
        && !concept.definition.is_empty()
        && !concept.long_description.is_empty()
        && !concept.keywords.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(id: ConceptId, title: &str) -> Concept {
        Concept::new(id, title, "definition")
            .with_long_description("long")
            .with_keywords("kw")
    }

    fn ids(store: &ConceptStore) -> Vec<ConceptId> {
        store.concepts().iter().map(|c| c.id).collect()
    }

    #[test]
    fn add_assigns_next_id() {
        let mut store = ConceptStore::new();
        assert_eq!(store.add(full(99, "First")), 1);
        assert_eq!(store.add(full(0, "Second")), 2);
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn add_is_searchable_immediately() {
        let mut store = ConceptStore::with_concepts(vec![full(5, "Records")]);
        let engine = store.engine();
        let id = store.add(full(0, "Pattern Matching"));
        assert_eq!(id, 6);
        assert_eq!(engine.search("pattern")[0].id, 6);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = ConceptStore::with_concepts(vec![full(1, "A"), full(2, "B")]);
        store.update(full(1, "Renamed")).unwrap();
        assert_eq!(store.concepts()[0].title, "Renamed");
        assert_eq!(store.search("renamed").len(), 1);
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut store = ConceptStore::new();
        let err = store.update(full(3, "Ghost")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(3)));
        assert_eq!(err.to_string(), "no concept with id 3");
    }

    #[test]
    fn delete_removes_and_reindexes() {
        let mut store = ConceptStore::with_concepts(vec![full(1, "Keep"), full(2, "Drop")]);
        let removed = store.delete(2).unwrap();
        assert_eq!(removed.title, "Drop");
        assert!(store.search("drop").is_empty());
        assert!(matches!(store.delete(2), Err(StoreError::NotFound(2))));
    }

    #[test]
    fn import_filters_invalid_concepts() {
        let mut store = ConceptStore::new();
        let count = store.import(vec![
            full(1, "Valid"),
            Concept::new(2, "No keywords", "d").with_long_description("l"),
            full(0, "Zero id"),
            full(3, ""),
        ]);
        assert_eq!(count, 1);
        assert_eq!(store.concepts()[0].title, "Valid");
    }

    #[test]
    fn import_renumbers_colliding_ids() {
        let mut store = ConceptStore::with_concepts(vec![full(4, "Existing")]);
        let count = store.import(vec![full(7, "Kept"), full(2, "Low"), full(7, "Duplicate")]);
        assert_eq!(count, 3);
        assert_eq!(ids(&store), vec![7, 8, 9]);
        assert!(store.get(4).is_none());
    }

    #[test]
    fn import_json_round_trip() {
        let mut source = ConceptStore::new();
        source.add(full(0, "Delegates"));
        source.add(full(0, "Events"));
        let json = source.export_json().unwrap();

        let mut target = ConceptStore::new();
        assert_eq!(target.import_json(&json).unwrap(), 2);
        assert_eq!(target.export(), source.export());
    }

    #[test]
    fn import_json_rejects_garbage() {
        let mut store = ConceptStore::new();
        assert!(matches!(store.import_json("{not json"), Err(StoreError::Json(_))));
    }
}
