//! Interaction subhandler table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::dispatch::domain::{EventKind, RegistrationError, is_valid_token};
use crate::dispatch::ports::InteractionHandler;

/// Two-level table routing interactions by event kind, then by the
/// lowercase leading word of the component's custom identifier.
///
/// Populated during startup only; there is no removal operation.
#[derive(Clone, Default)]
pub struct SubhandlerRegistry {
    tables: HashMap<EventKind, HashMap<String, Arc<dyn InteractionHandler>>>,
}

impl SubhandlerRegistry {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `kind` and the case-folded `token`.
    ///
    /// An existing handler under the same key is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidSubhandlerToken`] when `token` is
    /// empty or contains whitespace, since [`Self::resolve`] only ever
    /// matches a single leading word.
    pub fn register(
        &mut self,
        kind: EventKind,
        token: &str,
        handler: Arc<dyn InteractionHandler>,
    ) -> Result<(), RegistrationError> {
        let trimmed = token.trim();
        if !is_valid_token(trimmed) {
            return Err(RegistrationError::InvalidSubhandlerToken(token.to_owned()));
        }
        let key = trimmed.to_lowercase();
        if self
            .tables
            .entry(kind)
            .or_default()
            .insert(key.clone(), handler)
            .is_some()
        {
            tracing::debug!(?kind, token = %key, "subhandler replaced");
        }
        Ok(())
    }

    /// Resolves the handler for `identifier`'s leading word under `kind`.
    ///
    /// Only the first whitespace-delimited word is matched; the remainder is
    /// payload and is never consulted.
    #[must_use]
    pub fn resolve(&self, kind: EventKind, identifier: &str) -> Option<&Arc<dyn InteractionHandler>> {
        let token = identifier.split_whitespace().next().unwrap_or_default();
        self.tables.get(&kind)?.get(&token.to_lowercase())
    }
}

impl fmt::Debug for SubhandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, table) in &self.tables {
            let mut tokens: Vec<&str> = table.keys().map(String::as_str).collect();
            tokens.sort_unstable();
            map.entry(kind, &tokens);
        }
        map.finish()
    }
}
