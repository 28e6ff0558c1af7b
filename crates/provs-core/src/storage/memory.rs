//! In-memory storage backend.
//!
//! Same observable semantics as the filesystem backend, including which
//! resource types and ids are accepted, without touching disk. Useful for tests and for embedding the typed client where
//! persistence is not wanted.

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{Result, StoreError};
use crate::storage::check_segment;
use crate::storage::traits::{BackendClient, Blob};

type Namespaces = HashMap<String, HashMap<String, Vec<u8>>>;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    namespaces: RwLock<Namespaces>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Namespaces>> {
        self.namespaces
            .read()
            .map_err(|_| StoreError::Storage("memory store lock poisoned".to_string()))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Namespaces>> {
        self.namespaces
            .write()
            .map_err(|_| StoreError::Storage("memory store lock poisoned".to_string()))
    }

    fn check(resource_type: &str, id: &str) -> Result<()> {
        check_segment("resource type", resource_type)?;
        check_segment("resource id", id)
    }

    fn drain(resource_type: &str, id: &str, body: &mut dyn Read) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        body.read_to_end(&mut buf)
            .map_err(|e| StoreError::io(format!("read body for {}/{}", resource_type, id), e))?;
        Ok(buf)
    }
}

impl BackendClient for MemoryBackend {
    fn create_with_id(
        &self,
        resource_type: &str,
        id: &str,
        body: &mut dyn Read,
    ) -> Result<String> {
        Self::check(resource_type, id)?;
        let content = Self::drain(resource_type, id, body)?;
        self.write_guard()?
            .entry(resource_type.to_string())
            .or_default()
            .insert(id.to_string(), content);
        debug!(resource_type, id, "Stored record in memory");
        Ok(id.to_string())
    }

    fn read(&self, resource_type: &str, id: &str) -> Result<Blob> {
        Self::check(resource_type, id)?;
        self.read_guard()?
            .get(resource_type)
            .and_then(|records| records.get(id))
            .map(|content| Cursor::new(content.clone()))
            .ok_or_else(|| StoreError::not_found(resource_type, id))
    }

    fn read_all(&self, resource_type: &str) -> Result<Vec<Blob>> {
        check_segment("resource type", resource_type)?;
        let guard = self.read_guard()?;
        let records = guard
            .get(resource_type)
            .ok_or_else(|| StoreError::NamespaceNotFound {
                resource_type: resource_type.to_string(),
            })?;
        Ok(records
            .values()
            .map(|content| Cursor::new(content.clone()))
            .collect())
    }

    fn update(&self, resource_type: &str, id: &str, body: &mut dyn Read) -> Result<()> {
        Self::check(resource_type, id)?;
        let content = Self::drain(resource_type, id, body)?;
        let mut guard = self.write_guard()?;
        let slot = guard
            .get_mut(resource_type)
            .and_then(|records| records.get_mut(id))
            .ok_or_else(|| StoreError::not_found(resource_type, id))?;
        *slot = content;
        Ok(())
    }

    fn destroy(&self, resource_type: &str, id: &str) -> Result<()> {
        Self::check(resource_type, id)?;
        self.write_guard()?
            .get_mut(resource_type)
            .and_then(|records| records.remove(id))
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(resource_type, id))
    }
}
