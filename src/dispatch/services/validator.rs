//! Argument reconciliation against a command's schema.

use crate::dispatch::domain::{CommandDefinition, DispatchError, ValidatedArguments};

/// Reconciles raw tokens with a command's argument schema.
///
/// Surplus tokens are joined with single spaces into the final declared
/// argument. That applies whether or not the final argument is declared
/// greedy, unless strict greedy handling is enabled, in which case surplus
/// tokens are only accepted by a greedy tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgumentValidator {
    strict_greedy: bool,
}

impl ArgumentValidator {
    /// Creates a validator with the lenient collapse rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_greedy: false,
        }
    }

    /// Enables or disables strict greedy handling.
    #[must_use]
    pub const fn with_strict_greedy(mut self, strict_greedy: bool) -> Self {
        self.strict_greedy = strict_greedy;
        self
    }

    /// Validates `tokens` for `definition`.
    ///
    /// Accepted choice tokens are returned lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ArgumentCountMismatch`] when fewer tokens
    /// than required arguments are supplied (or, in strict mode, when surplus
    /// tokens reach a non-greedy final argument), and
    /// [`DispatchError::InvalidChoiceArgument`] when a token at a choice
    /// position matches none of its options.
    pub fn validate(
        &self,
        definition: &CommandDefinition,
        prefix: &str,
        tokens: Vec<String>,
    ) -> Result<ValidatedArguments, DispatchError> {
        let specs = definition.arguments();
        let required = definition.required_count();
        let provided = tokens.len();

        if provided < required {
            return Err(DispatchError::ArgumentCountMismatch {
                command: definition.name().to_owned(),
                expected: required,
                provided,
            });
        }

        let mut values = if provided > specs.len() {
            self.collapse(definition, tokens)?
        } else {
            tokens
        };

        for (spec, value) in specs.iter().zip(values.iter_mut()) {
            let Some(options) = spec.options() else {
                continue;
            };
            let folded = value.to_lowercase();
            if !options.contains(&folded) {
                return Err(DispatchError::InvalidChoiceArgument {
                    command: definition.name().to_owned(),
                    argument: spec.name().to_owned(),
                    value: value.clone(),
                    usage: definition.usage(prefix),
                });
            }
            *value = folded;
        }

        Ok(ValidatedArguments::new(specs, values))
    }

    fn collapse(
        &self,
        definition: &CommandDefinition,
        mut tokens: Vec<String>,
    ) -> Result<Vec<String>, DispatchError> {
        let specs = definition.arguments();
        let Some(last) = specs.last() else {
            return Ok(Vec::new());
        };
        if self.strict_greedy && !last.is_greedy() {
            return Err(DispatchError::ArgumentCountMismatch {
                command: definition.name().to_owned(),
                expected: specs.len(),
                provided: tokens.len(),
            });
        }
        let tail = tokens.split_off(specs.len().saturating_sub(1));
        tokens.push(tail.join(" "));
        Ok(tokens)
    }
}
