//! Error types for the NoteStore core library.

use thiserror::Error;

/// All errors that can occur within the NoteStore core library.
///
/// Predicate failures are classified rather than collapsed: a create that hits
/// an existing key is a [`Conflict`](NoteStoreError::Conflict), while an update
/// or delete of an absent key is a [`NotFound`](NoteStoreError::NotFound).
/// Transient store failures surface as [`Store`](NoteStoreError::Store) after
/// the client's own retry budget is exhausted.
#[derive(Debug, Error)]
pub enum NoteStoreError {
    /// A note with this ID already exists; creates never overwrite silently.
    #[error("Note already exists: {0}")]
    Conflict(String),

    /// No note with this ID exists; updates never create and deletes never no-op.
    #[error("Note not found: {0}")]
    NotFound(String),

    /// The request was missing a required field or its body could not be parsed.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The store call failed for a reason other than its conditional predicate.
    #[error("Store error: {0}")]
    Store(String),

    /// A note could not be converted to or from its stored representation.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Required configuration was missing or invalid at startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias that pins the error type to [`NoteStoreError`].
pub type Result<T> = std::result::Result<T, NoteStoreError>;

impl NoteStoreError {
    /// Returns the HTTP status code this error maps to in the response envelope.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Conflict(_) => 409,
            Self::NotFound(_) => 404,
            Self::MalformedRequest(_) => 400,
            Self::Store(_) | Self::Serialization(_) | Self::Config(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_409() {
        let e = NoteStoreError::Conflict("n1".to_string());
        assert_eq!(e.status_code(), 409);
        assert!(e.to_string().contains("n1"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let e = NoteStoreError::NotFound("n1".to_string());
        assert_eq!(e.status_code(), 404);
    }

    #[test]
    fn test_malformed_request_maps_to_400() {
        let e = NoteStoreError::MalformedRequest("missing id".to_string());
        assert_eq!(e.status_code(), 400);
    }

    #[test]
    fn test_store_failures_map_to_500() {
        assert_eq!(NoteStoreError::Store("timeout".to_string()).status_code(), 500);
        assert_eq!(
            NoteStoreError::Serialization("bad item".to_string()).status_code(),
            500
        );
    }
}
