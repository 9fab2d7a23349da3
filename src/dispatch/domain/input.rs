//! Prefix stripping and tokenisation of inbound command text.

/// Whitespace-split tokens of one command message.
///
/// Owned by a single dispatch call and never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedInput {
    command: String,
    arguments: Vec<String>,
}

impl TokenizedInput {
    /// Strips a leading `prefix` or `mention` from `content` and tokenises
    /// the remainder.
    ///
    /// Returns `None` when `content` starts with neither, meaning the message
    /// is not a command. The prefix is checked before the mention. An empty
    /// remainder yields an empty command name.
    #[must_use]
    pub fn parse(content: &str, prefix: &str, mention: &str) -> Option<Self> {
        let body = strip_command_prefix(content, prefix, mention)?;
        Some(Self::tokenize(body))
    }

    /// Splits already-stripped text on whitespace.
    #[must_use]
    pub fn tokenize(body: &str) -> Self {
        let mut tokens = body.split_whitespace().map(str::to_owned);
        let command = tokens.next().unwrap_or_default();
        Self {
            command,
            arguments: tokens.collect(),
        }
    }

    /// The command name as typed.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Raw argument tokens following the command name.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Consumes the input, yielding the command name and argument tokens.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.command, self.arguments)
    }
}

fn strip_command_prefix<'a>(content: &'a str, prefix: &str, mention: &str) -> Option<&'a str> {
    if !prefix.is_empty()
        && let Some(body) = content.strip_prefix(prefix)
    {
        return Some(body);
    }
    if mention.is_empty() {
        return None;
    }
    content.strip_prefix(mention)
}
