use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use provs_core::{ResourceType, VERSION};

/// Provs - a typed resource store kept as JSON files on disk
#[derive(Parser)]
#[command(name = "provs")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Storage root directory (must be absolute)
    #[arg(short, long, global = true, env = "PROVS_PATH")]
    pub path: Option<String>,

    /// Config file path
    #[arg(short, long, global = true, env = "PROVS_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file pointing at a storage root
    Init(InitArgs),

    /// List every record of a resource type
    List {
        /// Resource type
        #[arg(value_name = "TYPE", value_parser = parse_resource_type)]
        resource_type: ResourceType,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one record
    Show {
        #[arg(value_name = "TYPE", value_parser = parse_resource_type)]
        resource_type: ResourceType,

        #[arg(value_name = "ID")]
        id: String,
    },

    /// Create a record from JSON (argument or stdin)
    Create(CreateArgs),

    /// Replace a record with new JSON (argument or stdin)
    Update(UpdateArgs),

    /// Delete a record
    Delete {
        #[arg(value_name = "TYPE", value_parser = parse_resource_type)]
        resource_type: ResourceType,

        #[arg(value_name = "ID")]
        id: String,
    },

    /// Provision the default coffee catalogue if it is missing
    Seed,

    /// Manage secrets inside a secret manager
    #[command(subcommand)]
    Secret(SecretCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Storage root to record in the config (defaults to the data dir)
    #[arg(value_name = "PATH")]
    pub store_path: Option<String>,

    /// Replace updates with delete-then-create instead of atomic renames
    #[arg(long)]
    pub delete_then_create: bool,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `create` command
#[derive(Args)]
pub struct CreateArgs {
    #[arg(value_name = "TYPE", value_parser = parse_resource_type)]
    pub resource_type: ResourceType,

    /// Identifier to store under (overrides any id in the JSON)
    #[arg(long)]
    pub id: Option<String>,

    /// Record JSON (reads stdin when omitted)
    #[arg(long)]
    pub data: Option<String>,
}

/// Arguments for the `update` command
#[derive(Args)]
pub struct UpdateArgs {
    #[arg(value_name = "TYPE", value_parser = parse_resource_type)]
    pub resource_type: ResourceType,

    #[arg(value_name = "ID")]
    pub id: String,

    /// Record JSON (reads stdin when omitted)
    #[arg(long)]
    pub data: Option<String>,
}

#[derive(Subcommand)]
pub enum SecretCommands {
    /// Set (insert or replace) a secret
    Set {
        #[arg(value_name = "MANAGER_ID")]
        manager_id: String,
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Print a secret's value
    Get {
        #[arg(value_name = "MANAGER_ID")]
        manager_id: String,
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Remove a secret
    Rm {
        #[arg(value_name = "MANAGER_ID")]
        manager_id: String,
        #[arg(value_name = "NAME")]
        name: String,
    },
}

fn parse_resource_type(value: &str) -> Result<ResourceType, String> {
    value.parse().map_err(|e: provs_core::StoreError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_list_with_known_type() {
        let cli = Cli::try_parse_from(["provs", "list", "coffees", "--json"]).unwrap();
        match cli.command {
            Commands::List {
                resource_type,
                json,
            } => {
                assert_eq!(resource_type, ResourceType::Coffees);
                assert!(json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["provs", "show", "cofees", "1"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["provs", "-vv", "seed"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
