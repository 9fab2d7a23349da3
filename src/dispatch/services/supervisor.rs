//! Supervised launch of command handlers.

use std::any::Any;
use std::sync::Arc;

use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{Instrument, debug, error, info_span, warn};

use crate::dispatch::domain::Embed;
use crate::dispatch::ports::{CommandContext, CommandHandler, HandlerError};

/// A failure that escaped a launched command handler.
#[derive(Debug, Clone, Error)]
pub enum HandlerFault {
    /// The handler returned an error.
    #[error(transparent)]
    Failed(#[from] HandlerError),

    /// The handler panicked.
    #[error("handler panicked: {0}")]
    Panicked(String),

    /// The handler task was cancelled before completing.
    #[error("handler was cancelled")]
    Cancelled,
}

impl HandlerFault {
    fn from_join_error(join_error: JoinError) -> Self {
        match join_error.try_into_panic() {
            Ok(payload) => Self::Panicked(panic_message(payload.as_ref())),
            Err(_) => Self::Cancelled,
        }
    }
}

/// Spawns `handler` on its own task and watches it from a second task.
///
/// Any error or panic is logged and reported to the originating channel, so
/// a faulty handler can neither vanish silently nor take the dispatcher
/// down. The returned handle completes once the handler and any report have
/// finished.
pub fn launch(handler: Arc<dyn CommandHandler>, context: CommandContext) -> JoinHandle<()> {
    let gateway = Arc::clone(&context.gateway);
    let channel = context.message.channel_id.clone();
    let command = context.command.clone();
    let span = info_span!(
        "command",
        invocation_id = %context.invocation_id,
        command = %context.command,
        guild = ?context.message.guild_id,
    );

    let supervised = async move {
        let running = tokio::spawn(async move { handler.handle(context).await }.in_current_span());
        let fault = match running.await {
            Ok(Ok(())) => {
                debug!("command completed");
                return;
            }
            Ok(Err(handler_error)) => HandlerFault::Failed(handler_error),
            Err(join_error) => HandlerFault::from_join_error(join_error),
        };

        error!(error = %fault, "command handler fault");
        let report = Embed::error(format!("Something went wrong while running `{command}`."))
            .with_description(fault.to_string());
        if let Err(send_error) = gateway.send_embed(&channel, &report).await {
            warn!(error = %send_error, "failed to report handler fault");
        }
    };
    tokio::spawn(supervised.instrument(span))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
