//! Coffee catalogue records.

use serde::{Deserialize, Serialize};

use crate::storage::Identifiable;

/// A coffee on the menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    /// Identifier, also the record's file name
    #[serde(default)]
    pub id: String,

    pub name: String,

    /// Short marketing line
    pub teaser: String,

    pub description: String,

    pub price: f64,

    /// Image path or URL
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// One ingredient of a coffee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "ingredient_id")]
    pub id: String,

    pub name: String,

    pub quantity: i64,

    #[serde(default)]
    pub unit: String,
}

impl Identifiable for Coffee {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_uses_ingredient_id_key() {
        let ingredient = Ingredient {
            id: "0".to_string(),
            name: "Espresso".to_string(),
            quantity: 2,
            unit: "shot".to_string(),
        };
        let json = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(json["ingredient_id"], "0");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_coffee_decodes_without_optional_fields() {
        let coffee: Coffee = serde_json::from_str(
            r#"{"id":"3","name":"Name 3","teaser":"T","description":"D","price":1.1}"#,
        )
        .unwrap();
        assert_eq!(coffee.id, "3");
        assert!(coffee.ingredients.is_empty());
        assert!(coffee.image.is_empty());
    }
}
