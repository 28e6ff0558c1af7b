//! Named collections of secrets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::storage::Identifiable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretManager {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Secret name -> value
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secrets: BTreeMap<String, String>,

    pub name: String,
}

impl SecretManager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            secrets: BTreeMap::new(),
            name: name.into(),
        }
    }
}

impl Identifiable for SecretManager {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
