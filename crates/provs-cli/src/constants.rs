//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (I/O, serialization).
    pub const FAILURE: i32 = 1;

    /// Record or resource type not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, arguments or configuration.
    pub const INVALID_INPUT: i32 = 4;
}
