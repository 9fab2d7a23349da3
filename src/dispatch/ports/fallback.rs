//! Secondary content processing for messages that are not commands.

use async_trait::async_trait;

use crate::dispatch::domain::InboundMessage;

/// Handles plain messages the dispatcher did not recognise as commands,
/// e.g. passive link detection.
#[async_trait]
pub trait FallbackProcessor: Send + Sync {
    /// Processes `message`, returning `true` if it acted on it.
    async fn process(&self, message: &InboundMessage) -> bool;
}
