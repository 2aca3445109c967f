//! Core library for NoteStore — a CRUD gateway for notes over a conditional
//! key-value store.
//!
//! The primary entry point is [`Gateway`], which translates the four
//! operation intents (create, update, delete, list) into conditional store
//! operations and maps outcomes into a uniform `{statusCode, body}` response
//! envelope. Existence guarantees (no silent overwrite on create, no implicit
//! creation on update, no silent no-op on delete) ride entirely on the
//! store's atomic check-and-set, expressed through the [`NoteStore`] trait.
//!
//! Two backends ship with the crate: [`DynamoStore`] for DynamoDB and
//! [`MemoryStore`] for tests and local development.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    config::{GatewayConfig, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT},
    dynamo::DynamoStore,
    error::{NoteStoreError, Result},
    gateway::Gateway,
    memory::MemoryStore,
    note::{Note, NoteContent},
    request::Request,
    response::Response,
    store::{NoteStore, ScanPage},
};
