//! Per-event entry points for messages and interactions.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace, warn};

use super::{ArgumentValidator, Router, supervisor};
use crate::dispatch::domain::{
    BotIdentity, CommandDefinition, DispatchError, Embed, GatewayEvent, InboundMessage,
    InteractionEvent, InvocationId, TokenizedInput,
};
use crate::dispatch::ports::{
    ChatGateway, CommandContext, FallbackProcessor, InteractionContext,
};

const UNKNOWN_COMMAND_REPLY: &str = "couldn't find command";
const INCORRECT_USAGE_REPLY: &str = "incorrect command usage";

/// Textual conventions the dispatcher reads from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Literal prefix that marks a message as a command.
    pub prefix: String,
    /// Reject surplus tokens unless the final argument is a greedy tail.
    pub strict_greedy: bool,
}

impl DispatchOptions {
    /// Creates options with the lenient collapse rule.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            strict_greedy: false,
        }
    }
}

/// What happened to one inbound message.
#[derive(Debug)]
pub enum MessageDispatch {
    /// The bot wrote the message itself.
    SelfAuthored,
    /// No prefix or mention; fallback processing may run.
    NotCommand,
    /// Recognised as a command but rejected; a rejection was sent.
    Rejected(DispatchError),
    /// The handler was launched.
    Launched {
        /// Correlation identifier of the invocation.
        invocation_id: InvocationId,
        /// Completes when the handler and any fault report finish.
        handle: JoinHandle<()>,
    },
}

impl MessageDispatch {
    /// Returns `true` unless the message was not a command.
    ///
    /// Rejected commands count as handled: no fallback should run for them.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        !matches!(self, Self::NotCommand)
    }
}

/// Routes inbound events to command handlers and interaction subhandlers.
///
/// Stateless per call: the only state is the frozen [`Router`].
#[derive(Clone)]
pub struct Dispatcher {
    router: Arc<Router>,
    gateway: Arc<dyn ChatGateway>,
    identity: BotIdentity,
    prefix: Arc<str>,
    validator: ArgumentValidator,
    fallback: Option<Arc<dyn FallbackProcessor>>,
}

impl Dispatcher {
    /// Creates a dispatcher over a frozen router.
    #[must_use]
    pub fn new(
        router: Arc<Router>,
        gateway: Arc<dyn ChatGateway>,
        identity: BotIdentity,
        options: &DispatchOptions,
    ) -> Self {
        Self {
            router,
            gateway,
            identity,
            prefix: Arc::from(options.prefix.as_str()),
            validator: ArgumentValidator::new().with_strict_greedy(options.strict_greedy),
            fallback: None,
        }
    }

    /// Sets the processor tried for messages that are not commands.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackProcessor>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// The routing tables.
    #[must_use]
    pub const fn router(&self) -> &Arc<Router> {
        &self.router
    }

    /// Handles one inbound message.
    ///
    /// Returns `false` only when the message is not a command, in which case
    /// the caller may try fallback processing.
    pub async fn on_message(&self, message: &InboundMessage) -> bool {
        self.dispatch_message(message).await.is_handled()
    }

    /// Handles one inbound message and reports the outcome.
    ///
    /// Validated commands are launched on their own task and this method
    /// returns without waiting for them.
    #[instrument(skip_all, fields(channel = %message.channel_id, author = %message.author_id))]
    pub async fn dispatch_message(&self, message: &InboundMessage) -> MessageDispatch {
        if self.identity.is_self(&message.author_id) {
            return MessageDispatch::SelfAuthored;
        }
        let Some(input) =
            TokenizedInput::parse(&message.content, &self.prefix, self.identity.mention())
        else {
            return MessageDispatch::NotCommand;
        };

        match self.prepare(message, input) {
            Ok((definition, context)) => {
                let invocation_id = context.invocation_id;
                debug!(command = definition.name(), %invocation_id, "launching command");
                let handle = supervisor::launch(Arc::clone(definition.handler()), context);
                MessageDispatch::Launched {
                    invocation_id,
                    handle,
                }
            }
            Err(error) => {
                self.reject(message, &error).await;
                MessageDispatch::Rejected(error)
            }
        }
    }

    /// Handles one component interaction.
    ///
    /// The subhandler is awaited inline. Unroutable interactions are ignored.
    #[instrument(skip_all, fields(kind = ?event.kind, custom_id = %event.custom_id))]
    pub async fn on_interaction(&self, event: &InteractionEvent) {
        let Some(handler) = self.router.resolve_subhandler(event.kind, &event.custom_id) else {
            trace!("no subhandler registered");
            return;
        };
        let context = InteractionContext {
            event: event.clone(),
            gateway: Arc::clone(&self.gateway),
        };
        if let Err(error) = handler.handle(context).await {
            warn!(%error, "interaction handler failed");
        }
    }

    /// Routes a gateway event to the matching entry point.
    ///
    /// Messages that are not commands go to the fallback processor, if any.
    /// Returns `true` when something acted on the event. Guild lifecycle
    /// events are not handled here.
    pub async fn on_event(&self, event: &GatewayEvent) -> bool {
        match event {
            GatewayEvent::MessageCreate(message) => {
                if self.on_message(message).await {
                    return true;
                }
                match &self.fallback {
                    Some(fallback) => fallback.process(message).await,
                    None => false,
                }
            }
            GatewayEvent::InteractionCreate(interaction) => {
                self.on_interaction(interaction).await;
                true
            }
            GatewayEvent::GuildCreate { .. } => false,
        }
    }

    fn prepare<'r>(
        &'r self,
        message: &InboundMessage,
        input: TokenizedInput,
    ) -> Result<(&'r CommandDefinition, CommandContext), DispatchError> {
        let (name, tokens) = input.into_parts();
        let definition = self
            .router
            .resolve_command(&name)
            .ok_or(DispatchError::UnknownCommand(name))?;
        let arguments = self.validator.validate(definition, &self.prefix, tokens)?;

        let context = CommandContext {
            invocation_id: InvocationId::new(),
            command: definition.name().to_owned(),
            message: message.clone(),
            arguments,
            prefix: Arc::clone(&self.prefix),
            gateway: Arc::clone(&self.gateway),
            router: Arc::clone(&self.router),
        };
        Ok((definition, context))
    }

    async fn reject(&self, message: &InboundMessage, error: &DispatchError) {
        debug!(%error, "command rejected");
        let channel = &message.channel_id;
        let sent = match error {
            DispatchError::UnknownCommand(_) => {
                self.gateway
                    .send_message(channel, UNKNOWN_COMMAND_REPLY)
                    .await
            }
            DispatchError::ArgumentCountMismatch { .. } => {
                self.gateway
                    .send_message(channel, INCORRECT_USAGE_REPLY)
                    .await
            }
            DispatchError::InvalidChoiceArgument { usage, .. } => {
                let embed = Embed::new()
                    .with_title("Invalid argument!")
                    .with_description(format!(
                        "The correct usage for that command is:\n`{usage}`"
                    ));
                self.gateway.send_embed(channel, &embed).await
            }
        };
        if let Err(send_error) = sent {
            warn!(error = %send_error, "failed to send rejection");
        }
    }
}
