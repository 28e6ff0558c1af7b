//! Records holding a single write-only attribute.

use serde::{Deserialize, Serialize};

use crate::storage::Identifiable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteOnly {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub attr: String,
}

impl Identifiable for WriteOnly {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
