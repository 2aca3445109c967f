//! The four note handlers: create, update, delete, list.
//!
//! Each handler is stateless and single-shot: parse the request, issue
//! exactly one store call, map the outcome into the response envelope. All
//! consistency guarantees ride on the store's conditional writes; the gateway
//! never locks and never retries. Every failure is converted to an
//! `{"error": <message>}` envelope at this boundary — no error propagates
//! past a handler.

use crate::{Note, NoteContent, NoteStore, NoteStoreError, Request, Response, Result, ScanPage};

/// The NoteStore gateway: a leaf adapter from operation intents to
/// conditional key-value operations.
///
/// Holds the single long-lived store handle; construct once at process start
/// and share across invocations.
pub struct Gateway<S> {
    store: S,
}

impl<S: NoteStore> Gateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a note from the request body. 201 echoes the note; 409 if the
    /// ID is already taken.
    pub async fn create(&self, request: &Request) -> Response {
        match self.try_create(request).await {
            Ok(note) => Response::json(201, &note),
            Err(err) => fail("create", err),
        }
    }

    /// Replaces a note's title and body. 200 echoes the full updated note;
    /// 404 if the ID does not exist.
    pub async fn update(&self, request: &Request) -> Response {
        match self.try_update(request).await {
            Ok(note) => Response::json(200, &note),
            Err(err) => fail("update", err),
        }
    }

    /// Deletes a note. 200 with the deleted ID as the body; 404 if the ID
    /// does not exist.
    pub async fn delete(&self, request: &Request) -> Response {
        match self.try_delete(request).await {
            Ok(id) => Response::json(200, &id),
            Err(err) => fail("delete", err),
        }
    }

    /// Lists notes, following scan pages up to an optional `limit` query
    /// parameter. 200 with `{items, count, truncated}`.
    pub async fn list(&self, request: &Request) -> Response {
        match self.try_list(request).await {
            Ok(page) => Response::json(200, &page),
            Err(err) => fail("list", err),
        }
    }

    async fn try_create(&self, request: &Request) -> Result<Note> {
        let note: Note = parse_body(request)?;
        if note.id.trim().is_empty() {
            return Err(NoteStoreError::MalformedRequest(
                "id must be present and non-empty".to_string(),
            ));
        }
        self.store.put_new(note.clone()).await?;
        Ok(note)
    }

    async fn try_update(&self, request: &Request) -> Result<Note> {
        let id = path_id(request)?;
        let content: NoteContent = parse_body(request)?;
        self.store.replace(&id, content.clone()).await?;
        Ok(Note {
            id,
            title: content.title,
            body: content.body,
        })
    }

    async fn try_delete(&self, request: &Request) -> Result<String> {
        let id = path_id(request)?;
        self.store.remove(&id).await?;
        Ok(id)
    }

    async fn try_list(&self, request: &Request) -> Result<ScanPage> {
        let limit = match request.query_parameter("limit") {
            Some(raw) => Some(raw.parse::<usize>().map_err(|err| {
                NoteStoreError::MalformedRequest(format!("invalid limit '{raw}': {err}"))
            })?),
            None => None,
        };
        self.store.scan(limit).await
    }
}

fn path_id(request: &Request) -> Result<String> {
    match request.path_parameter("id") {
        Some(id) if !id.trim().is_empty() => Ok(id.to_string()),
        _ => Err(NoteStoreError::MalformedRequest(
            "missing id path parameter".to_string(),
        )),
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(request: &Request) -> Result<T> {
    let body = request
        .body
        .as_deref()
        .ok_or_else(|| NoteStoreError::MalformedRequest("missing request body".to_string()))?;
    serde_json::from_str(body)
        .map_err(|err| NoteStoreError::MalformedRequest(format!("invalid request body: {err}")))
}

fn fail(operation: &str, err: NoteStoreError) -> Response {
    match &err {
        NoteStoreError::MalformedRequest(_) => {
            tracing::debug!(operation, error = %err, "rejected request");
        }
        _ => {
            tracing::error!(operation, error = %err, "store call failed");
        }
    }
    Response::from_error(&err)
}
