//! Inbound gateway events and the bot's own identity.

use serde::{Deserialize, Serialize};

use super::{ChannelId, GuildId, MessageId, UserId};

/// A text message delivered by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Message identifier.
    pub id: MessageId,
    /// Channel the message was posted in.
    pub channel_id: ChannelId,
    /// Guild the channel belongs to; `None` for direct messages.
    pub guild_id: Option<GuildId>,
    /// Author of the message.
    pub author_id: UserId,
    /// Raw message text.
    pub content: String,
}

impl InboundMessage {
    /// Creates a guild message.
    #[must_use]
    pub fn new(
        id: MessageId,
        channel_id: ChannelId,
        author_id: UserId,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            channel_id,
            guild_id: None,
            author_id,
            content: content.into(),
        }
    }

    /// Sets the guild the message was posted in.
    #[must_use]
    pub fn in_guild(mut self, guild_id: GuildId) -> Self {
        self.guild_id = Some(guild_id);
        self
    }
}

/// Category of an interaction callback.
///
/// Discriminants follow the gateway's interaction type numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Gateway liveness check.
    Ping = 1,
    /// Native application command.
    ApplicationCommand = 2,
    /// Button press or select-menu choice on a message component.
    MessageComponent = 3,
    /// Autocomplete request for an application command option.
    Autocomplete = 4,
    /// Modal form submission.
    ModalSubmit = 5,
}

/// A component interaction delivered by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Interaction category.
    pub kind: EventKind,
    /// Opaque identifier attached to the component. The leading word routes
    /// the event; the remainder is handler-defined payload.
    pub custom_id: String,
    /// Channel the component lives in.
    pub channel_id: ChannelId,
    /// Guild the channel belongs to, if any.
    pub guild_id: Option<GuildId>,
    /// User who triggered the interaction.
    pub user_id: UserId,
    /// Values chosen in a select menu, if any.
    #[serde(default)]
    pub values: Vec<String>,
}

impl InteractionEvent {
    /// Creates an interaction event without select values.
    #[must_use]
    pub fn new(
        kind: EventKind,
        custom_id: impl Into<String>,
        channel_id: ChannelId,
        user_id: UserId,
    ) -> Self {
        Self {
            kind,
            custom_id: custom_id.into(),
            channel_id,
            guild_id: None,
            user_id,
            values: Vec::new(),
        }
    }

    /// Sets the selected values.
    #[must_use]
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the handler payload following the routing token.
    #[must_use]
    pub fn payload(&self) -> &str {
        self.custom_id
            .trim_start()
            .split_once(char::is_whitespace)
            .map_or("", |(_, rest)| rest.trim_start())
    }
}

/// Events the gateway hands to the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayEvent {
    /// A message was posted.
    MessageCreate(InboundMessage),
    /// A component was interacted with.
    InteractionCreate(InteractionEvent),
    /// The bot joined, or reconnected to, a guild.
    GuildCreate {
        /// Guild identifier.
        guild_id: GuildId,
        /// Guild display name.
        name: String,
    },
}

/// The bot's own account, known once the gateway connection identifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    user_id: UserId,
    mention: String,
}

impl BotIdentity {
    /// Derives the identity, including the `<@id>` mention string.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        let mention = format!("<@{user_id}>");
        Self { user_id, mention }
    }

    /// Mention string that may precede a command name.
    #[must_use]
    pub fn mention(&self) -> &str {
        &self.mention
    }

    /// Returns `true` when `author` is the bot itself.
    #[must_use]
    pub fn is_self(&self, author: &UserId) -> bool {
        self.user_id == *author
    }
}
