//! Seeding of default data.

use tracing::info;

use crate::error::Result;
use crate::model::{Coffee, Ingredient};
use crate::storage::Client;

/// Number of coffees in the default catalogue.
pub const DEFAULT_COFFEE_COUNT: usize = 9;

/// Build the default catalogue: coffee `i` has `i` ingredients.
pub fn default_coffees() -> Vec<Coffee> {
    (1..=DEFAULT_COFFEE_COUNT as i64)
        .map(|i| Coffee {
            id: i.to_string(),
            name: format!("Name {}", i),
            teaser: format!("Teaser {}", i),
            description: format!("Description {}", i),
            price: 1.1,
            image: String::new(),
            ingredients: (0..i)
                .map(|j| Ingredient {
                    id: j.to_string(),
                    name: format!("Ingredient name {}", j),
                    quantity: i * j,
                    unit: String::new(),
                })
                .collect(),
        })
        .collect()
}

/// Write the default catalogue unless coffee `"1"` already exists.
///
/// # Returns
///
/// Returns how many coffees were written (0 when already provisioned).
pub fn seed_coffees(client: &Client<Coffee>) -> Result<usize> {
    match client.get_by_id("1") {
        Ok(_) => return Ok(0),
        Err(err) if err.is_not_found() => {}
        Err(err) => return Err(err),
    }

    let coffees = default_coffees();
    for coffee in &coffees {
        client.create_with_id(coffee)?;
    }
    info!(count = coffees.len(), "Provisioned default coffees");
    Ok(coffees.len())
}
