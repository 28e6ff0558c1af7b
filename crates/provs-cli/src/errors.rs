//! CLI error types for structured error handling.
//!
//! Errors coming out of `provs_core` or raised by command handlers are
//! mapped to exit codes here, so `main` can report every failure the same
//! way.

use std::fmt;

use provs_core::StoreError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found, with a hint on how to fix it
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error returned by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    match err.downcast_ref::<StoreError>() {
        Some(StoreError::NotFound { .. }) | Some(StoreError::NamespaceNotFound { .. }) => {
            exit_codes::NOT_FOUND
        }
        Some(StoreError::InvalidInput(_)) | Some(StoreError::InvalidConfiguration(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_exit_codes() {
        let not_found = anyhow::Error::new(StoreError::not_found("order", "x"));
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let config = anyhow::Error::new(StoreError::InvalidConfiguration("relative".into()));
        assert_eq!(exit_code_for(&config), exit_codes::INVALID_INPUT);

        let storage = anyhow::Error::new(StoreError::Storage("poisoned".into()));
        assert_eq!(exit_code_for(&storage), exit_codes::FAILURE);
    }

    #[test]
    fn test_context_does_not_hide_store_error() {
        let err = anyhow::Error::new(StoreError::not_found("order", "x")).context("show failed");
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_cli_errors_keep_their_codes() {
        let err = anyhow::Error::new(CliError::invalid_input("bad json"));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }
}
