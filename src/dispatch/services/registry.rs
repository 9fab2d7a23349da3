//! Command registry and alias table.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::dispatch::domain::{CommandDefinition, RegistrationError};

/// Command definitions keyed by canonical name, plus the alias table.
///
/// Mutated only through `&mut self` during startup; lookups take `&self`
/// and need no locking once the registry is shared.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandDefinition>,
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under its canonical name and points every alias,
    /// including the name itself, at it.
    ///
    /// Alias collisions are not errors: the later registration wins. A
    /// command left with no alias pointing at it is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidSchema`] when the definition's
    /// name, aliases or argument schema are malformed.
    pub fn register(&mut self, definition: CommandDefinition) -> Result<(), RegistrationError> {
        definition.validate_schema()?;
        let name = definition.name().to_owned();

        for alias in definition.aliases() {
            if let Some(previous) = self.aliases.insert(alias.to_owned(), name.clone())
                && previous != name
            {
                debug!(alias, previous = %previous, command = %name, "alias reassigned");
            }
        }
        if self.commands.insert(name.clone(), definition).is_some() {
            debug!(command = %name, "command definition replaced");
        }
        self.drop_unreachable();
        Ok(())
    }

    /// Resolves a command by any of its aliases, case-insensitively.
    ///
    /// Returns `None` when the alias is unknown; that is an expected outcome
    /// on the dispatch path, not a fault.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&CommandDefinition> {
        let canonical = self.aliases.get(&name.to_lowercase())?;
        self.commands.get(canonical)
    }

    /// Canonical names of every registered command, sorted.
    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn drop_unreachable(&mut self) {
        let reachable: HashSet<&str> = self.aliases.values().map(String::as_str).collect();
        self.commands.retain(|name, _| {
            let keep = reachable.contains(name.as_str());
            if !keep {
                debug!(command = %name, "command dropped after losing every alias");
            }
            keep
        });
    }
}
