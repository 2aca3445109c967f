//! Internal domain modules for the NoteStore core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod config;
pub mod dynamo;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod note;
pub mod request;
pub mod response;
pub mod store;

#[doc(inline)]
pub use config::{GatewayConfig, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
#[doc(inline)]
pub use dynamo::DynamoStore;
#[doc(inline)]
pub use error::{NoteStoreError, Result};
#[doc(inline)]
pub use gateway::Gateway;
#[doc(inline)]
pub use memory::MemoryStore;
#[doc(inline)]
pub use note::{Note, NoteContent};
#[doc(inline)]
pub use request::Request;
#[doc(inline)]
pub use response::Response;
#[doc(inline)]
pub use store::{NoteStore, ScanPage};
