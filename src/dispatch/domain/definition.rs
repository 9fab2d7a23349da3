//! Command definition and usage rendering.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::{ArgumentSpec, RegistrationError};
use crate::dispatch::ports::CommandHandler;

/// A text command as registered with the router.
///
/// Immutable once registered. The canonical name is stored lowercase and is
/// always a member of its own alias set.
#[derive(Clone)]
pub struct CommandDefinition {
    name: String,
    display_name: String,
    description: String,
    arguments: Vec<ArgumentSpec>,
    aliases: BTreeSet<String>,
    handler: Arc<dyn CommandHandler>,
}

impl CommandDefinition {
    /// Creates a command definition with no arguments and no extra aliases.
    ///
    /// `name` keeps its original casing as the display name; the canonical
    /// name is its lowercase form.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        Self::with_shared_handler(name, description, Arc::new(handler))
    }

    /// Creates a command definition around an already shared handler.
    #[must_use]
    pub fn with_shared_handler(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Self {
        let display_name = name.into();
        let canonical = display_name.to_lowercase();
        let mut aliases = BTreeSet::new();
        aliases.insert(canonical.clone());
        Self {
            name: canonical,
            display_name,
            description: description.into(),
            arguments: Vec::new(),
            aliases,
            handler,
        }
    }

    /// Appends an argument specification.
    #[must_use]
    pub fn with_argument(mut self, argument: ArgumentSpec) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Adds an alias. Aliases are case-folded.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.insert(alias.into().to_lowercase());
        self
    }

    /// Adds several aliases.
    #[must_use]
    pub fn with_aliases(self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        aliases.into_iter().fold(self, Self::with_alias)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as originally declared, for display.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Ordered argument schema.
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Every alias, including the canonical name.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(String::as_str)
    }

    /// Aliases other than the canonical name, sorted.
    pub fn extra_aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases().filter(move |alias| *alias != self.name)
    }

    /// The handler launched for validated invocations.
    #[must_use]
    pub const fn handler(&self) -> &Arc<dyn CommandHandler> {
        &self.handler
    }

    /// Number of leading arguments that must be supplied.
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.arguments
            .iter()
            .take_while(|argument| !argument.is_optional())
            .count()
    }

    /// Renders `<prefix><name> <arg> <arg> ...` for user display.
    #[must_use]
    pub fn usage(&self, prefix: &str) -> String {
        let mut usage = format!("{prefix}{}", self.name);
        for argument in &self.arguments {
            usage.push(' ');
            usage.push_str(&argument.to_string());
        }
        usage
    }

    /// Checks the name, aliases and argument schema.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidSchema`] when the name or an alias
    /// is empty or contains whitespace, a choice argument declares no
    /// options, a required argument follows an optional one, or a greedy
    /// argument is not last.
    pub fn validate_schema(&self) -> Result<(), RegistrationError> {
        if let Some(alias) = self.aliases.iter().find(|alias| !is_valid_token(alias)) {
            return Err(self.schema_error(format!(
                "alias '{alias}' must be a single non-empty word"
            )));
        }

        let mut seen_optional = false;
        let last_index = self.arguments.len().saturating_sub(1);
        for (index, argument) in self.arguments.iter().enumerate() {
            if argument.options().is_some_and(<[String]>::is_empty) {
                return Err(self.schema_error(format!(
                    "choice argument '{}' must declare options",
                    argument.name()
                )));
            }
            if argument.options().is_some_and(|options| {
                options.iter().any(|option| !is_valid_token(option))
            }) {
                return Err(self.schema_error(format!(
                    "choice argument '{}' has an empty or multi-word option",
                    argument.name()
                )));
            }
            if argument.is_greedy() && index != last_index {
                return Err(self.schema_error(format!(
                    "greedy argument '{}' must be last",
                    argument.name()
                )));
            }
            if seen_optional && !argument.is_optional() {
                return Err(self.schema_error(format!(
                    "required argument '{}' follows an optional argument",
                    argument.name()
                )));
            }
            seen_optional |= argument.is_optional();
        }
        Ok(())
    }

    fn schema_error(&self, reason: String) -> RegistrationError {
        RegistrationError::InvalidSchema {
            command: self.display_name.clone(),
            reason,
        }
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// Whether `value` is usable as a single routing word.
pub(crate) fn is_valid_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace) && !value.contains('|')
}
