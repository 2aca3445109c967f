use serde::{Deserialize, Serialize};

/// A single note. `id` is the sole identity and partition key in the store
/// and is immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// The mutable part of a note. Updates replace `title` and `body` wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_round_trips_through_json() {
        let note = Note {
            id: "n1".to_string(),
            title: "A".to_string(),
            body: "x".to_string(),
        };

        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"id":"n1","title":"A","body":"x"}"#);

        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn test_missing_content_fields_default_to_empty() {
        let note: Note = serde_json::from_str(r#"{"id":"n2"}"#).unwrap();
        assert_eq!(note.id, "n2");
        assert!(note.title.is_empty());
        assert!(note.body.is_empty());
    }

    #[test]
    fn test_note_content_parses_without_id() {
        let content: NoteContent = serde_json::from_str(r#"{"title":"B","body":"y"}"#).unwrap();
        assert_eq!(content.title, "B");
        assert_eq!(content.body, "y");
    }
}
