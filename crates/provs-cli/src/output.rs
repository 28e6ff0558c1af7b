//! Output formatting helpers for the CLI.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use provs_core::model::{Coffee, Order, SecretManager, WriteOnly};
use provs_core::Identifiable;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// An entity the CLI can store and print.
pub trait Record: Identifiable + Serialize + DeserializeOwned {
    /// One-line description for list output.
    fn summary(&self) -> String;
}

impl Record for Coffee {
    fn summary(&self) -> String {
        format!(
            "{} ({:.2}, {} ingredients)",
            self.name,
            self.price,
            self.ingredients.len()
        )
    }
}

impl Record for Order {
    fn summary(&self) -> String {
        format!("{} items, total {:.2}", self.items.len(), self.total())
    }
}

impl Record for SecretManager {
    fn summary(&self) -> String {
        // Secret values are never printed in listings.
        format!("{} ({} secrets)", self.name, self.secrets.len())
    }
}

impl Record for WriteOnly {
    fn summary(&self) -> String {
        if self.attr.is_empty() {
            "(unset)".to_string()
        } else {
            "(set)".to_string()
        }
    }
}

/// Render records as an `ID | SUMMARY` table.
pub fn records_table<T: Record>(records: &[T]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "SUMMARY"]);
    for record in records {
        table.add_row(vec![record.id().to_string(), record.summary()]);
    }
    table.to_string()
}

/// Pretty JSON for a single value.
pub fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| anyhow::anyhow!("JSON error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_ids() {
        let orders = vec![
            Order {
                id: "a".to_string(),
                items: Vec::new(),
            },
            Order {
                id: "b".to_string(),
                items: Vec::new(),
            },
        ];
        let rendered = records_table(&orders);
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("a"));
        assert!(rendered.contains("0 items"));
    }

    #[test]
    fn test_secret_manager_summary_hides_values() {
        let mut manager = SecretManager::new("vault");
        manager
            .secrets
            .insert("db".to_string(), "hunter2".to_string());
        let summary = manager.summary();
        assert!(summary.contains("1 secrets"));
        assert!(!summary.contains("hunter2"));
    }
}
