//! In-memory DocumentStore implementation for tests and local runs.

use std::collections::HashMap;

use wargame_core::{DocumentError, DocumentId, DocumentStore};

/// In-memory implementation of DocumentStore.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDocumentStore {
    documents: HashMap<DocumentId, String>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn put(&mut self, text: &str) -> Result<DocumentId, DocumentError> {
        let id = DocumentId::for_text(text);
        self.documents
            .entry(id.clone())
            .or_insert_with(|| text.to_owned());
        Ok(id)
    }

    fn get(&self, id: &DocumentId) -> Result<String, DocumentError> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound(id.clone()))
    }

    fn contains(&self, id: &DocumentId) -> bool {
        self.documents.contains_key(id)
    }
}
