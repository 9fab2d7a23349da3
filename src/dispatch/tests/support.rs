//! Test handlers shared by the dispatch unit tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

use crate::dispatch::domain::{CommandDefinition, InteractionEvent};
use crate::dispatch::ports::{
    CommandContext, CommandHandler, HandlerError, InteractionContext, InteractionHandler,
};

/// Does nothing.
pub struct NoopHandler;

#[async_trait]
impl CommandHandler for NoopHandler {
    async fn handle(&self, _context: CommandContext) -> Result<(), HandlerError> {
        Ok(())
    }
}

/// Records the validated argument values of every call.
#[derive(Clone, Default)]
pub struct CapturingHandler {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl CapturingHandler {
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl CommandHandler for CapturingHandler {
    async fn handle(&self, context: CommandContext) -> Result<(), HandlerError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(context.arguments.values().to_vec());
        Ok(())
    }
}

/// Always fails.
pub struct FailingHandler;

#[async_trait]
impl CommandHandler for FailingHandler {
    async fn handle(&self, _context: CommandContext) -> Result<(), HandlerError> {
        Err(HandlerError::Failed("catalog lookup timed out".to_owned()))
    }
}

/// Always panics.
pub struct PanickingHandler;

#[async_trait]
impl CommandHandler for PanickingHandler {
    async fn handle(&self, _context: CommandContext) -> Result<(), HandlerError> {
        panic!("scraper exploded");
    }
}

/// Waits until every holder of the barrier has arrived, then replies.
pub struct RendezvousHandler {
    pub barrier: Arc<Barrier>,
    pub reply: &'static str,
}

#[async_trait]
impl CommandHandler for RendezvousHandler {
    async fn handle(&self, context: CommandContext) -> Result<(), HandlerError> {
        self.barrier.wait().await;
        context.reply(self.reply).await
    }
}

/// Records every interaction it receives.
#[derive(Clone, Default)]
pub struct CapturingSubhandler {
    pub events: Arc<Mutex<Vec<InteractionEvent>>>,
}

impl CapturingSubhandler {
    pub fn events(&self) -> Vec<InteractionEvent> {
        self.events.lock().expect("events lock").clone()
    }
}

#[async_trait]
impl InteractionHandler for CapturingSubhandler {
    async fn handle(&self, context: InteractionContext) -> Result<(), HandlerError> {
        self.events.lock().expect("events lock").push(context.event);
        Ok(())
    }
}

/// Builds a definition with a no-op handler.
pub fn noop_command(name: &str) -> CommandDefinition {
    CommandDefinition::new(name, format!("{name} command"), NoopHandler)
}
