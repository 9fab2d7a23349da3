//! Handler ports for text commands and component interactions.
//!
//! The two tables hold distinct handler traits, so a subhandler can never
//! be registered as a command or vice versa.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::gateway::{ChatGateway, GatewayError};
use crate::dispatch::domain::{
    Embed, InboundMessage, InteractionEvent, InvocationId, ValidatedArguments,
};
use crate::dispatch::services::Router;

/// Handles a validated text command.
///
/// Launched on its own task; an error or panic is reported to the
/// originating channel by the dispatcher's supervisor.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Runs the command.
    async fn handle(&self, context: CommandContext) -> Result<(), HandlerError>;
}

/// Handles a component interaction callback.
///
/// Awaited inline on the delivery path, so implementations must finish
/// within the gateway's response window.
#[async_trait]
pub trait InteractionHandler: Send + Sync {
    /// Runs the callback.
    async fn handle(&self, context: InteractionContext) -> Result<(), HandlerError>;
}

/// Failures raised inside a handler.
#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    /// Sending a reply failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The handler could not complete its work.
    #[error("{0}")]
    Failed(String),

    /// An external collaborator failed.
    #[error("handler dependency failed: {0}")]
    Dependency(Arc<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    /// Wraps a collaborator failure.
    pub fn dependency(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Dependency(Arc::new(err))
    }
}

/// Everything a command handler receives for one invocation.
#[derive(Clone)]
pub struct CommandContext {
    /// Correlation identifier for logs.
    pub invocation_id: InvocationId,
    /// Canonical name of the invoked command.
    pub command: String,
    /// The triggering message.
    pub message: InboundMessage,
    /// Validated argument tokens.
    pub arguments: ValidatedArguments,
    /// Configured command prefix, for rendering usage strings.
    pub prefix: Arc<str>,
    /// Gateway for replies.
    pub gateway: Arc<dyn ChatGateway>,
    /// Frozen routing tables, for listing and help surfaces.
    pub router: Arc<Router>,
}

impl CommandContext {
    /// Sends a plain text reply to the originating channel.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Gateway`] when the gateway send fails.
    pub async fn reply(&self, content: &str) -> Result<(), HandlerError> {
        self.gateway
            .send_message(&self.message.channel_id, content)
            .await?;
        Ok(())
    }

    /// Sends an embed to the originating channel as a reply to the
    /// triggering message.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Gateway`] when the gateway send fails.
    pub async fn reply_embed(&self, embed: Embed) -> Result<(), HandlerError> {
        let reply = embed.replying_to(self.message.id.clone());
        self.gateway
            .send_embed(&self.message.channel_id, &reply)
            .await?;
        Ok(())
    }
}

/// Everything an interaction handler receives.
#[derive(Clone)]
pub struct InteractionContext {
    /// The interaction event.
    pub event: InteractionEvent,
    /// Gateway for responses.
    pub gateway: Arc<dyn ChatGateway>,
}
