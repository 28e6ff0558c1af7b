//! Coffee orders.

use serde::{Deserialize, Serialize};

use super::coffee::Coffee;
use crate::storage::Identifiable;

/// An order of one or more coffees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub coffee: Coffee,
    pub quantity: i64,
}

impl Order {
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self {
            id: String::new(),
            items,
        }
    }

    /// Total price across all items.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.coffee.price * item.quantity as f64)
            .sum()
    }
}

impl Identifiable for Order {
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
    fn test_empty_order_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&Order::default()).unwrap(), "{}");
    }

    #[test]
    fn test_total() {
        let coffee = Coffee {
            price: 2.5,
            ..Coffee::default()
        };
        let order = Order::new(vec![OrderItem {
            coffee,
            quantity: 2,
        }]);
        assert!((order.total() - 5.0).abs() < f64::EPSILON);
    }
}
