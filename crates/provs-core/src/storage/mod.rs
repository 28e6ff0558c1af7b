//! Storage abstraction for Provs.
//!
//! This module defines the `BackendClient` protocol, the `Identifiable`
//! contract for stored entities, and the typed `Client<T>` that application
//! code talks to.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic:
//! - `FsBackend`: one JSON file per record under `<base>/<type>/<id>`
//! - `MemoryBackend`: process-local maps, for tests and embedding
//!
//! Backends only ever see opaque byte streams. Encoding and identifier
//! assignment belong to `Client<T>`, so new backends (network, database)
//! slot in without touching it.

pub mod client;
pub mod filesystem;
pub mod memory;
pub mod resource_type;
pub mod traits;

// Re-export public types
pub use client::Client;
pub use filesystem::{FsBackend, UpdateStrategy};
pub use memory::MemoryBackend;
pub use resource_type::ResourceType;
pub use traits::{BackendClient, Blob, Identifiable};

use crate::error::{Result, StoreError};

/// Resource types and ids must each be a single visible path segment.
/// Leading dots are reserved for staging files.
pub(crate) fn check_segment(kind: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StoreError::InvalidInput(format!("{} must not be empty", kind)));
    }
    if value.starts_with('.') || value.contains('/') || value.contains('\\') {
        return Err(StoreError::InvalidInput(format!(
            "{} '{}' is not a valid path segment",
            kind, value
        )));
    }
    Ok(())
}
