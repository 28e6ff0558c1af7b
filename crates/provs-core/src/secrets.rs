//! Read-modify-write helpers for individual secrets.
//!
//! A secret lives inside a `SecretManager` record. Each helper reads the
//! manager, changes one key and writes the whole record back with `update`.
//! Two writers touching the same manager race; the last update wins.

use crate::error::{Result, StoreError};
use crate::model::SecretManager;
use crate::storage::Client;

fn missing(client: &Client<SecretManager>, manager_id: &str, name: &str) -> StoreError {
    StoreError::not_found(
        client.resource_type().as_str(),
        format!("{}/{}", manager_id, name),
    )
}

/// Insert or replace a secret.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the manager does not exist.
pub fn set_secret(
    client: &Client<SecretManager>,
    manager_id: &str,
    name: &str,
    value: &str,
) -> Result<()> {
    let mut manager = client.get_by_id(manager_id)?;
    manager.secrets.insert(name.to_string(), value.to_string());
    client.update(&manager)
}

/// Read a secret's value.
pub fn get_secret(client: &Client<SecretManager>, manager_id: &str, name: &str) -> Result<String> {
    let manager = client.get_by_id(manager_id)?;
    manager
        .secrets
        .get(name)
        .cloned()
        .ok_or_else(|| missing(client, manager_id, name))
}

/// Remove a secret.
///
/// Not idempotent: removing a name that is not set is an error rather than
/// a no-op, so delete paths that may run twice should treat `NotFound` as
/// success.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the manager or the secret is absent.
pub fn remove_secret(client: &Client<SecretManager>, manager_id: &str, name: &str) -> Result<()> {
    let mut manager = client.get_by_id(manager_id)?;
    if manager.secrets.remove(name).is_none() {
        return Err(missing(client, manager_id, name));
    }
    client.update(&manager)
}
