//! Storage protocol and identity contract.
//!
//! The `BackendClient` trait defines the raw operations every storage
//! backend must implement. It is keyed by `(resource_type, id)` and moves
//! opaque bytes; it knows nothing about the shape of the records.

use std::io::{Cursor, Read};

use uuid::Uuid;

use crate::error::Result;

/// A record body returned by a backend. Fully buffered and rewindable.
pub type Blob = Cursor<Vec<u8>>;

/// Capability every stored entity must provide.
///
/// This is the only way the generic layer discovers and changes identity
/// without knowing the entity's other fields.
pub trait Identifiable {
    /// Current identifier, or `""` when none has been assigned yet.
    fn id(&self) -> &str;

    /// Assign an identifier.
    fn set_id(&mut self, id: String);
}

/// Backend-agnostic storage protocol.
///
/// Implementations must ensure:
/// - `(resource_type, id)` addresses at most one record
/// - Writing to an existing id replaces the record (no collision check)
/// - A missing record is reported as `StoreError::NotFound`, distinguishable
///   from other failures
///
/// No locking is implied. Concurrent writers to the same key race and the
/// last one wins.
pub trait BackendClient: Send + Sync {
    /// Store a record under a freshly generated identifier.
    ///
    /// The identifier is a random UUID v4 and is assumed never to collide
    /// with an existing record.
    ///
    /// # Returns
    ///
    /// Returns the generated identifier.
    fn create(&self, resource_type: &str, body: &mut dyn Read) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.create_with_id(resource_type, &id, body)
    }

    /// Store a record under a caller-chosen identifier.
    ///
    /// Creates the resource type namespace if needed. An existing record with
    /// the same identifier is overwritten.
    ///
    /// # Returns
    ///
    /// Returns the identifier, echoed.
    fn create_with_id(&self, resource_type: &str, id: &str, body: &mut dyn Read)
        -> Result<String>;

    /// Read one record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the namespace or record is absent.
    fn read(&self, resource_type: &str, id: &str) -> Result<Blob>;

    /// Read every record of a resource type.
    ///
    /// Order is unspecified; callers must not depend on it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NamespaceNotFound` if nothing was ever written
    /// under `resource_type`.
    fn read_all(&self, resource_type: &str) -> Result<Vec<Blob>>;

    /// Replace the content of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the record does not exist.
    fn update(&self, resource_type: &str, id: &str, body: &mut dyn Read) -> Result<()>;

    /// Remove a record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the record does not exist.
    fn destroy(&self, resource_type: &str, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Minimal backend that only records what `create_with_id` received.
    #[derive(Default)]
    struct Recording {
        writes: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl BackendClient for Recording {
        fn create_with_id(
            &self,
            resource_type: &str,
            id: &str,
            body: &mut dyn Read,
        ) -> Result<String> {
            let mut buf = Vec::new();
            body.read_to_end(&mut buf).unwrap();
            self.writes
                .lock()
                .unwrap()
                .insert(format!("{}/{}", resource_type, id), buf);
            Ok(id.to_string())
        }

        fn read(&self, resource_type: &str, id: &str) -> Result<Blob> {
            Err(crate::StoreError::not_found(resource_type, id))
        }

        fn read_all(&self, _resource_type: &str) -> Result<Vec<Blob>> {
            Ok(Vec::new())
        }

        fn update(&self, _resource_type: &str, _id: &str, _body: &mut dyn Read) -> Result<()> {
            Ok(())
        }

        fn destroy(&self, _resource_type: &str, _id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_create_generates_uuid_and_delegates() {
        let backend = Recording::default();

        let id = backend
            .create("order", &mut &b"{}"[..])
            .expect("create should succeed");

        assert!(Uuid::parse_str(&id).is_ok());
        let writes = backend.writes.lock().unwrap();
        assert_eq!(writes.get(&format!("order/{}", id)), Some(&b"{}".to_vec()));
    }

    #[test]
    fn test_default_create_ids_are_distinct() {
        let backend = Recording::default();
        let a = backend.create("order", &mut &b"1"[..]).unwrap();
        let b = backend.create("order", &mut &b"2"[..]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_trait_is_object_safe() {
        let backend: Box<dyn BackendClient> = Box::new(Recording::default());
        assert!(backend.read_all("coffees").unwrap().is_empty());
    }
}
