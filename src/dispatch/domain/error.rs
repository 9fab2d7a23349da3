//! Error types for command registration and dispatch.

use thiserror::Error;

/// Reasons a recognised command is rejected before its handler runs.
///
/// These never escape the dispatcher; each variant maps to a deterministic
/// rejection message sent back to the channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No alias matches the requested command name.
    #[error("command '{0}' was not found")]
    UnknownCommand(String),

    /// Fewer tokens than required arguments, or surplus tokens under strict
    /// greedy handling.
    #[error("command '{command}' expects {expected} argument(s) but {provided} were provided")]
    ArgumentCountMismatch {
        /// Canonical command name.
        command: String,
        /// Number of arguments the schema requires (or accepts, for surplus).
        expected: usize,
        /// Number of tokens supplied.
        provided: usize,
    },

    /// A token at a choice position matched none of the declared options.
    #[error("invalid value '{value}' for argument '{argument}' of '{command}'; usage: {usage}")]
    InvalidChoiceArgument {
        /// Canonical command name.
        command: String,
        /// Name of the offending argument.
        argument: String,
        /// The rejected token as supplied.
        value: String,
        /// Rendered usage string for the command.
        usage: String,
    },
}

/// Errors raised while registering commands at startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The command's name or argument schema is malformed.
    #[error("invalid schema for command '{command}': {reason}")]
    InvalidSchema {
        /// Command name as supplied.
        command: String,
        /// Validation reason.
        reason: String,
    },

    /// A subhandler token is empty or spans more than one word.
    #[error("subhandler token '{0}' must be a single non-empty word")]
    InvalidSubhandlerToken(String),
}
