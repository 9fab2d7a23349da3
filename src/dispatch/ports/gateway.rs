//! Outbound chat gateway port.
//!
//! The gateway client owns the network connection; the dispatcher and
//! handlers only ever send through this trait.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::dispatch::domain::{ChannelId, Embed};

/// Result type for gateway send operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Send operations exposed by the chat gateway client.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Sends a plain text message to a channel.
    async fn send_message(&self, channel: &ChannelId, content: &str) -> GatewayResult<()>;

    /// Sends an embed to a channel.
    async fn send_embed(&self, channel: &ChannelId, embed: &Embed) -> GatewayResult<()>;
}

/// Errors returned by gateway adapters.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The remote service refused the request.
    #[error("gateway rejected the request: {0}")]
    Rejected(String),

    /// The request could not be delivered.
    #[error("gateway transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wraps a transport failure from the gateway adapter.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
