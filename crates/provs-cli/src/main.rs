//! Provs CLI - command-line access to a Provs resource store
//!
//! A thin consumer of `provs_core`: every command builds a typed client over
//! the filesystem backend and maps results to text, JSON and exit codes.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use crate::app::open_store;
use crate::cli::{Cli, Commands};
use crate::commands::init::handle_init;
use crate::commands::misc::handle_completions;
use crate::commands::records::{
    handle_create, handle_delete, handle_list, handle_show, handle_update,
};
use crate::commands::secret::handle_secret;
use crate::commands::seed::handle_seed;
use crate::errors::exit_code_for;

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => handle_init(cli, args),
        Commands::List {
            resource_type,
            json,
        } => handle_list(&open_store(cli)?, *resource_type, *json),
        Commands::Show { resource_type, id } => {
            handle_show(&open_store(cli)?, *resource_type, id)
        }
        Commands::Create(args) => handle_create(&open_store(cli)?, args),
        Commands::Update(args) => handle_update(&open_store(cli)?, args),
        Commands::Delete { resource_type, id } => {
            handle_delete(&open_store(cli)?, *resource_type, id)
        }
        Commands::Seed => handle_seed(&open_store(cli)?),
        Commands::Secret(command) => handle_secret(&open_store(cli)?, command),
        Commands::Completions { shell } => handle_completions(*shell),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "Command failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}
