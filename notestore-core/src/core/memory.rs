//! In-memory [`NoteStore`] backend.
//!
//! Implements the same conditional semantics as the DynamoDB backend, with
//! the mutex standing in for the store's atomic check-and-set. Used by the
//! gateway tests and for local development without a DynamoDB endpoint.

use crate::{Note, NoteContent, NoteStore, NoteStoreError, Result, ScanPage};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: Mutex<HashMap<String, Note>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Note>> {
        // A poisoned lock only means another test thread panicked mid-write;
        // the map itself is still usable.
        self.notes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn put_new(&self, note: Note) -> Result<()> {
        let mut notes = self.lock();
        if notes.contains_key(&note.id) {
            return Err(NoteStoreError::Conflict(note.id));
        }
        notes.insert(note.id.clone(), note);
        Ok(())
    }

    async fn replace(&self, id: &str, content: NoteContent) -> Result<()> {
        let mut notes = self.lock();
        match notes.get_mut(id) {
            Some(note) => {
                note.title = content.title;
                note.body = content.body;
                Ok(())
            }
            None => Err(NoteStoreError::NotFound(id.to_string())),
        }
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut notes = self.lock();
        match notes.remove(id) {
            Some(_) => Ok(()),
            None => Err(NoteStoreError::NotFound(id.to_string())),
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.lock().get(id).cloned())
    }

    async fn scan(&self, limit: Option<usize>) -> Result<ScanPage> {
        let notes = self.lock();
        let items: Vec<Note> = match limit {
            Some(limit) => notes.values().take(limit).cloned().collect(),
            None => notes.values().cloned().collect(),
        };
        let truncated = items.len() < notes.len();
        let count = items.len();
        Ok(ScanPage {
            items,
            count,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            title: "title".to_string(),
            body: "body".to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_new_rejects_duplicate_and_keeps_original() {
        let store = MemoryStore::new();
        store.put_new(note("n1")).await.unwrap();

        let mut second = note("n1");
        second.title = "other".to_string();
        let err = store.put_new(second).await.unwrap_err();
        assert!(matches!(err, NoteStoreError::Conflict(ref id) if id == "n1"));

        let stored = store.get("n1").await.unwrap().unwrap();
        assert_eq!(stored.title, "title");
    }

    #[tokio::test]
    async fn test_replace_requires_existing_key() {
        let store = MemoryStore::new();
        let content = NoteContent {
            title: "B".to_string(),
            body: "y".to_string(),
        };

        let err = store.replace("n1", content.clone()).await.unwrap_err();
        assert!(matches!(err, NoteStoreError::NotFound(_)));
        assert!(store.get("n1").await.unwrap().is_none());

        store.put_new(note("n1")).await.unwrap();
        store.replace("n1", content).await.unwrap();
        let stored = store.get("n1").await.unwrap().unwrap();
        assert_eq!(stored.id, "n1");
        assert_eq!(stored.title, "B");
        assert_eq!(stored.body, "y");
    }

    #[tokio::test]
    async fn test_remove_requires_existing_key() {
        let store = MemoryStore::new();
        let err = store.remove("n1").await.unwrap_err();
        assert!(matches!(err, NoteStoreError::NotFound(_)));

        store.put_new(note("n1")).await.unwrap();
        store.remove("n1").await.unwrap();
        assert!(store.get("n1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_honors_limit_and_reports_truncation() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.put_new(note(&format!("n{i}"))).await.unwrap();
        }

        let full = store.scan(None).await.unwrap();
        assert_eq!(full.count, 5);
        assert!(!full.truncated);

        let cut = store.scan(Some(3)).await.unwrap();
        assert_eq!(cut.count, 3);
        assert_eq!(cut.items.len(), 3);
        assert!(cut.truncated);

        let exact = store.scan(Some(5)).await.unwrap();
        assert_eq!(exact.count, 5);
        assert!(!exact.truncated);
    }
}
