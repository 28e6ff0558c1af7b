use provs_core::model::SecretManager;
use provs_core::secrets::{get_secret, remove_secret, set_secret};
use provs_core::{Client, ResourceType};

use crate::app::AppContext;
use crate::cli::SecretCommands;

pub fn handle_secret(ctx: &AppContext, command: &SecretCommands) -> anyhow::Result<()> {
    let client: Client<SecretManager> =
        Client::new(ctx.backend.clone(), ResourceType::SecretManager);
    match command {
        SecretCommands::Set {
            manager_id,
            name,
            value,
        } => {
            set_secret(&client, manager_id, name, value)?;
            if !ctx.quiet {
                println!("Set secret {} in {}", name, manager_id);
            }
        }
        SecretCommands::Get { manager_id, name } => {
            println!("{}", get_secret(&client, manager_id, name)?);
        }
        SecretCommands::Rm { manager_id, name } => {
            remove_secret(&client, manager_id, name)?;
            if !ctx.quiet {
                println!("Removed secret {} from {}", name, manager_id);
            }
        }
    }
    Ok(())
}
