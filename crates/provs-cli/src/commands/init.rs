use std::path::PathBuf;

use provs_core::{FsBackend, UpdateStrategy};

use crate::app::resolve_config_path;
use crate::cli::{Cli, InitArgs};
use crate::config::{default_store_path, write_config, ProvsConfig};
use crate::errors::CliError;

pub fn handle_init(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path(cli)?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ))
        .into());
    }

    let store_path = match args.store_path.as_deref().or(cli.path.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };
    let update_strategy = if args.delete_then_create {
        UpdateStrategy::DeleteThenCreate
    } else {
        UpdateStrategy::AtomicReplace
    };

    // Validates the path and creates the root before anything is recorded.
    FsBackend::new(&store_path)?;
    write_config(&config_path, &ProvsConfig::new(store_path.clone(), update_strategy))?;

    if !cli.quiet {
        println!("Initialized store at {}", store_path.display());
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
