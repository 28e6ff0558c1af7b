use provs_core::model::Coffee;
use provs_core::provision::seed_coffees;
use provs_core::{Client, ResourceType};

use crate::app::AppContext;

pub fn handle_seed(ctx: &AppContext) -> anyhow::Result<()> {
    let client: Client<Coffee> = Client::new(ctx.backend.clone(), ResourceType::Coffees);
    let created = seed_coffees(&client)?;
    if !ctx.quiet {
        if created == 0 {
            println!("Coffees already provisioned in {}", ctx.store_path.display());
        } else {
            println!("Provisioned {} coffees in {}", created, ctx.store_path.display());
        }
    }
    Ok(())
}
