//! Concept records as handed over by the surrounding store.

use serde::{Deserialize, Serialize};

pub type ConceptId = u64;

/// A learning note. All fields except `id` are free text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Concept {
    pub id: ConceptId,
    pub title: String,
    pub definition: String,
    pub long_description: String,
    pub usage_notes: String,
    pub rationale: String,
    pub code_sample: String,
    /// Comma separated keywords, as typed by the author.
    pub keywords: String,
    pub comparisons: String,
}

/// Text fields of a [Concept].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Definition,
    LongDescription,
    UsageNotes,
    Rationale,
    CodeSample,
    Keywords,
    Comparisons,
}

impl Concept {
    pub fn new(id: ConceptId, title: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            definition: definition.into(),
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = text.into();
        self
    }

    pub fn with_usage_notes(mut self, text: impl Into<String>) -> Self {
        self.usage_notes = text.into();
        self
    }

    pub fn with_rationale(mut self, text: impl Into<String>) -> Self {
        self.rationale = text.into();
        self
    }

    pub fn with_code_sample(mut self, code: impl Into<String>) -> Self {
        self.code_sample = code.into();
        self
    }

    pub fn with_comparisons(mut self, text: impl Into<String>) -> Self {
        self.comparisons = text.into();
        self
    }

    /// Borrow one text field.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Definition => &self.definition,
            SearchField::LongDescription => &self.long_description,
            SearchField::UsageNotes => &self.usage_notes,
            SearchField::Rationale => &self.rationale,
            SearchField::CodeSample => &self.code_sample,
            SearchField::Keywords => &self.keywords,
            SearchField::Comparisons => &self.comparisons,
        }
    }
}
