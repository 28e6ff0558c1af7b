//! Typed client over a storage backend.

use std::fmt;
use std::io::Read;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::storage::resource_type::ResourceType;
use crate::storage::traits::{BackendClient, Identifiable};

/// JSON-aware CRUD client bound to one entity type and one resource type.
///
/// This is the component application code should use. It owns identifier
/// assignment and serialization; the backend only ever sees bytes.
pub struct Client<T> {
    backend: Arc<dyn BackendClient>,
    resource_type: ResourceType,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            resource_type: self.resource_type,
            _entity: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("resource_type", &self.resource_type)
            .finish_non_exhaustive()
    }
}

impl<T> Client<T>
where
    T: Identifiable + Serialize + DeserializeOwned,
{
    pub fn new(backend: Arc<dyn BackendClient>, resource_type: ResourceType) -> Self {
        Self {
            backend,
            resource_type,
            _entity: PhantomData,
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Fetch every record of this resource type.
    ///
    /// Fails on the first record that does not decode; records decoded
    /// before it are discarded. Order is whatever the backend returns.
    pub fn get_all(&self) -> Result<Vec<T>> {
        let blobs = self.backend.read_all(self.resource_type.as_str())?;
        let mut items = Vec::with_capacity(blobs.len());
        for blob in blobs {
            items.push(self.decode(blob, "*")?);
        }
        Ok(items)
    }

    /// Fetch one record. `NotFound` is passed through unchanged.
    pub fn get_by_id(&self, id: &str) -> Result<T> {
        let blob = self.backend.read(self.resource_type.as_str(), id)?;
        self.decode(blob, id)
    }

    /// Store `obj`, assigning a fresh UUID first if it has no identifier.
    ///
    /// The assignment is made on `obj` itself, so the caller keeps the
    /// identified value.
    ///
    /// # Returns
    ///
    /// Returns the identifier the record was stored under.
    pub fn create(&self, obj: &mut T) -> Result<String> {
        if obj.id().is_empty() {
            obj.set_id(Uuid::new_v4().to_string());
        }
        let body = self.encode(obj)?;
        let id = self
            .backend
            .create_with_id(self.resource_type.as_str(), obj.id(), &mut body.as_slice())?;
        debug!(resource_type = %self.resource_type, id = %id, "Created entity");
        Ok(id)
    }

    /// Store `obj` under the identifier it already carries.
    ///
    /// An existing record with the same identifier is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if `obj` has no identifier.
    pub fn create_with_id(&self, obj: &T) -> Result<()> {
        let id = self.require_id(obj)?;
        let body = self.encode(obj)?;
        self.backend
            .create_with_id(self.resource_type.as_str(), id, &mut body.as_slice())?;
        Ok(())
    }

    /// Replace the stored record with `obj` in full. No merge happens.
    pub fn update(&self, obj: &T) -> Result<()> {
        let id = self.require_id(obj)?;
        let body = self.encode(obj)?;
        self.backend
            .update(self.resource_type.as_str(), id, &mut body.as_slice())?;
        debug!(resource_type = %self.resource_type, id, "Updated entity");
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.backend.destroy(self.resource_type.as_str(), id)
    }

    fn require_id<'a>(&self, obj: &'a T) -> Result<&'a str> {
        let id = obj.id();
        if id.is_empty() {
            return Err(StoreError::InvalidInput(format!(
                "{} entity has no identifier",
                self.resource_type
            )));
        }
        Ok(id)
    }

    fn encode(&self, obj: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(obj).map_err(|e| {
            StoreError::serialization(format!("encode {}/{}", self.resource_type, obj.id()), e)
        })
    }

    fn decode(&self, blob: impl Read, id: &str) -> Result<T> {
        serde_json::from_reader(blob).map_err(|e| {
            StoreError::serialization(format!("decode {}/{}", self.resource_type, id), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(default)]
        id: String,
        text: String,
    }

    impl Identifiable for Note {
        fn id(&self) -> &str {
            &self.id
        }

        fn set_id(&mut self, id: String) {
            self.id = id;
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    fn client() -> (Arc<MemoryBackend>, Client<Note>) {
        let backend = Arc::new(MemoryBackend::new());
        let client = Client::new(backend.clone(), ResourceType::Secret);
        (backend, client)
    }

    #[test]
    fn test_create_assigns_id_in_place() {
        let (_, client) = client();
        let mut n = note("", "hello");

        let id = client.create(&mut n).unwrap();

        assert_eq!(n.id, id);
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(client.get_by_id(&id).unwrap(), n);
    }

    #[test]
    fn test_create_keeps_caller_id() {
        let (_, client) = client();
        let mut n = note("mine", "hello");

        assert_eq!(client.create(&mut n).unwrap(), "mine");
        assert_eq!(n.id, "mine");
    }

    #[test]
    fn test_create_with_id_requires_identifier() {
        let (_, client) = client();
        let err = client.create_with_id(&note("", "x")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn test_update_requires_identifier() {
        let (_, client) = client();
        let err = client.update(&note("", "x")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn test_stored_bytes_are_plain_json() {
        let (backend, client) = client();
        client.create_with_id(&note("n1", "body")).unwrap();

        let raw = backend.read("secret", "n1").unwrap().into_inner();
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(value, serde_json::json!({"id": "n1", "text": "body"}));
    }

    #[test]
    fn test_get_all_fails_fast_on_bad_record() {
        let (backend, client) = client();
        client.create_with_id(&note("good", "ok")).unwrap();
        backend
            .create_with_id("secret", "bad", &mut &b"not json"[..])
            .unwrap();

        let err = client.get_all().unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
    }

    #[test]
    fn test_get_by_id_decode_error_names_record() {
        let (backend, client) = client();
        backend
            .create_with_id("secret", "bad", &mut &b"{\"id\":1}"[..])
            .unwrap();

        let err = client.get_by_id("bad").unwrap_err();
        assert!(err.to_string().contains("secret/bad"));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let (_, client) = client();
        client.create_with_id(&note("x", "bye")).unwrap();

        client.delete("x").unwrap();

        assert!(client.get_by_id("x").unwrap_err().is_not_found());
        assert!(client.delete("x").unwrap_err().is_not_found());
    }
}
