//! The store abstraction the gateway is built over.
//!
//! [`NoteStore`] captures the conditional-write pattern the handlers rely on:
//! every mutation carries an existence predicate that the backend must
//! evaluate atomically. Implementations delegate the check-and-set to the
//! underlying store and never take their own locks — concurrent conflicting
//! calls are arbitrated by the store, not the gateway.

use crate::{Note, NoteContent, Result};
use async_trait::async_trait;
use serde::Serialize;

/// The result of scanning the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanPage {
    /// All notes read, in no particular order.
    pub items: Vec<Note>,
    /// Number of notes in `items`.
    pub count: usize,
    /// True iff a caller-supplied limit cut the scan short.
    pub truncated: bool,
}

/// Interface for a notes collection over a conditional key-value store.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Inserts a note under the predicate "key must not already exist".
    ///
    /// # Errors
    ///
    /// [`NoteStoreError::Conflict`](crate::NoteStoreError::Conflict) if a note
    /// with this ID already exists; the existing note is left untouched.
    async fn put_new(&self, note: Note) -> Result<()>;

    /// Replaces a note's content wholesale under the predicate "key must
    /// already exist". Never creates.
    ///
    /// # Errors
    ///
    /// [`NoteStoreError::NotFound`](crate::NoteStoreError::NotFound) if no
    /// note with this ID exists.
    async fn replace(&self, id: &str, content: NoteContent) -> Result<()>;

    /// Deletes a note under the predicate "key must already exist". Never a
    /// silent no-op.
    ///
    /// # Errors
    ///
    /// [`NoteStoreError::NotFound`](crate::NoteStoreError::NotFound) if no
    /// note with this ID exists.
    async fn remove(&self, id: &str) -> Result<()>;

    /// Reads a single note by ID, if present.
    async fn get(&self, id: &str) -> Result<Option<Note>>;

    /// Reads the collection, following continuation tokens until exhaustion
    /// or until `limit` notes have been collected.
    async fn scan(&self, limit: Option<usize>) -> Result<ScanPage>;
}
