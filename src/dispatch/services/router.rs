//! The dual routing table for commands and interaction subhandlers.

use std::sync::Arc;

use super::{CommandRegistry, SubhandlerRegistry};
use crate::dispatch::domain::{CommandDefinition, EventKind, RegistrationError};
use crate::dispatch::ports::InteractionHandler;

/// Command and subhandler tables behind one registration surface.
///
/// Built with `&mut` access during startup, then frozen by moving it into an
/// `Arc` that the dispatcher and handlers share for lock-free lookups.
#[derive(Debug, Clone, Default)]
pub struct Router {
    commands: CommandRegistry,
    subhandlers: SubhandlerRegistry,
}

impl Router {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a text command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the definition's schema is invalid.
    pub fn register(&mut self, definition: CommandDefinition) -> Result<(), RegistrationError> {
        self.commands.register(definition)
    }

    /// Registers an interaction subhandler for `kind` and `token`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when `token` is not a single word.
    pub fn register_subhandler(
        &mut self,
        kind: EventKind,
        token: &str,
        handler: impl InteractionHandler + 'static,
    ) -> Result<(), RegistrationError> {
        self.subhandlers.register(kind, token, Arc::new(handler))
    }

    /// Resolves a command by name or alias.
    #[must_use]
    pub fn resolve_command(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.resolve(name)
    }

    /// Resolves the subhandler for an interaction identifier.
    #[must_use]
    pub fn resolve_subhandler(
        &self,
        kind: EventKind,
        identifier: &str,
    ) -> Option<&Arc<dyn InteractionHandler>> {
        self.subhandlers.resolve(kind, identifier)
    }

    /// The command table.
    #[must_use]
    pub const fn commands(&self) -> &CommandRegistry {
        &self.commands
    }
}
