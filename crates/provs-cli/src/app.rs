//! Application-level wiring: config and storage-root resolution, backend
//! construction.

use std::path::PathBuf;
use std::sync::Arc;

use provs_core::{BackendClient, FsBackend};
use tracing::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config, ProvsConfig};
use crate::errors::CliError;

/// Everything a command handler needs.
pub struct AppContext {
    pub backend: Arc<dyn BackendClient>,
    pub store_path: PathBuf,
    pub quiet: bool,
}

/// Resolve the config file path from `--config` / `PROVS_CONFIG`, falling
/// back to the XDG config dir.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match cli.config.as_deref() {
        Some(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => default_config_path(),
    }
}

/// Load the config file.
///
/// A missing default config is fine (defaults apply); a config file named
/// explicitly must exist.
pub fn load_config(cli: &Cli) -> anyhow::Result<ProvsConfig> {
    let path = resolve_config_path(cli)?;
    if path.exists() {
        return read_config(&path);
    }
    if cli.config.is_some() {
        return Err(CliError::not_found(
            format!("No config file at {}", path.display()),
            "Run `provs init` or drop --config/PROVS_CONFIG to use defaults.",
        )
        .into());
    }
    Ok(ProvsConfig::default())
}

/// Storage root: `--path` / `PROVS_PATH`, then the config file, then the
/// XDG data dir.
pub fn resolve_store_path(cli: &Cli, config: &ProvsConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.storage.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    default_store_path()
}

/// Open the filesystem store the CLI is pointed at.
pub fn open_store(cli: &Cli) -> anyhow::Result<AppContext> {
    let config = load_config(cli)?;
    let store_path = resolve_store_path(cli, &config)?;
    let backend =
        FsBackend::new(&store_path)?.with_update_strategy(config.storage.update_strategy);
    debug!(
        store_path = %store_path.display(),
        update_strategy = ?config.storage.update_strategy,
        "Opened store"
    );
    Ok(AppContext {
        backend: Arc::new(backend),
        store_path,
        quiet: cli.quiet,
    })
}
