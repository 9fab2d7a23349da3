//! In-memory gateway adapter that records every send.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::dispatch::domain::{ChannelId, Embed};
use crate::dispatch::ports::{ChatGateway, GatewayError, GatewayResult};

/// One outbound send captured by [`RecordingGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMessage {
    /// A plain text message.
    Text {
        /// Target channel.
        channel: ChannelId,
        /// Message text.
        content: String,
    },
    /// An embed.
    Embed {
        /// Target channel.
        channel: ChannelId,
        /// Embed payload.
        embed: Embed,
    },
}

impl SentMessage {
    /// Target channel of the send.
    #[must_use]
    pub const fn channel(&self) -> &ChannelId {
        match self {
            Self::Text { channel, .. } | Self::Embed { channel, .. } => channel,
        }
    }

    /// Returns `true` when the rendered text of the send contains `needle`.
    ///
    /// Embeds match on title, description and field values.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Text { content, .. } => content.contains(needle),
            Self::Embed { embed, .. } => {
                embed
                    .title
                    .as_deref()
                    .is_some_and(|title| title.contains(needle))
                    || embed
                        .description
                        .as_deref()
                        .is_some_and(|description| description.contains(needle))
                    || embed.fields.iter().any(|field| field.value.contains(needle))
            }
        }
    }
}

/// Thread-safe gateway that stores sends instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct RecordingGateway {
    sent: Arc<RwLock<Vec<SentMessage>>>,
}

impl RecordingGateway {
    /// Creates an empty recording gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every send so far, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] when lock acquisition fails.
    pub fn sent(&self) -> GatewayResult<Vec<SentMessage>> {
        let sent = self
            .sent
            .read()
            .map_err(|err| GatewayError::Rejected(err.to_string()))?;
        Ok(sent.clone())
    }

    fn record(&self, message: SentMessage) -> GatewayResult<()> {
        let mut sent = self
            .sent
            .write()
            .map_err(|err| GatewayError::Rejected(err.to_string()))?;
        sent.push(message);
        Ok(())
    }
}

#[async_trait]
impl ChatGateway for RecordingGateway {
    async fn send_message(&self, channel: &ChannelId, content: &str) -> GatewayResult<()> {
        self.record(SentMessage::Text {
            channel: channel.clone(),
            content: content.to_owned(),
        })
    }

    async fn send_embed(&self, channel: &ChannelId, embed: &Embed) -> GatewayResult<()> {
        self.record(SentMessage::Embed {
            channel: channel.clone(),
            embed: embed.clone(),
        })
    }
}
