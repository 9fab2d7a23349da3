//! Rich message payloads sent back through the gateway.

use serde::{Deserialize, Serialize};

use super::MessageId;

/// Brand colour applied to every embed.
pub const ACCENT_COLOUR: u32 = 0x001e_807c;

/// A titled name/value pair inside an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
}

/// A rich message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Optional heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Side-bar colour.
    pub colour: u32,
    /// Ordered fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    /// Message this embed replies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<MessageId>,
}

impl Embed {
    /// Creates an empty embed in the accent colour.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            colour: ACCENT_COLOUR,
            fields: Vec::new(),
            reply_to: None,
        }
    }

    /// Creates the title-only embed used for error reports.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().with_title(message)
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Marks the embed as a reply to `message`.
    #[must_use]
    pub fn replying_to(mut self, message: MessageId) -> Self {
        self.reply_to = Some(message);
        self
    }
}

impl Default for Embed {
    fn default() -> Self {
        Self::new()
    }
}
