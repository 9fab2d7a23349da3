//! Shared helpers for in-memory dispatch integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use partsbot::commands::register_builtin;
use partsbot::dispatch::adapters::{RecordingGateway, SentMessage};
use partsbot::dispatch::domain::{
    BotIdentity, ChannelId, GuildId, InboundMessage, MessageId, UserId,
};
use partsbot::dispatch::services::{DispatchOptions, Dispatcher, MessageDispatch, Router};
use partsbot::guild::{adapters::InMemoryGuildRepository, services::GuildService};
use rstest::fixture;

/// Configured owner of every test bot.
pub const OWNER: &str = "405";

/// Guild every test message is posted in.
pub const GUILD: &str = "guild-1";

/// Guild service type used by the integration tests.
pub type TestGuildService = GuildService<InMemoryGuildRepository, DefaultClock>;

/// A dispatcher wired to in-memory adapters.
pub struct TestBot {
    pub dispatcher: Dispatcher,
    pub gateway: RecordingGateway,
    pub guilds: TestGuildService,
}

impl TestBot {
    /// Delivers `content` from `author` and waits for any launched command.
    ///
    /// Returns whether the dispatcher handled the message.
    pub async fn send(&self, author: &str, content: &str) -> bool {
        let message = InboundMessage::new(
            MessageId::new("m-1"),
            ChannelId::new("parts"),
            UserId::new(author),
            content,
        )
        .in_guild(GuildId::new(GUILD));
        let outcome = self.dispatcher.dispatch_message(&message).await;
        let handled = outcome.is_handled();
        if let MessageDispatch::Launched { handle, .. } = outcome {
            handle.await.expect("command task should not be aborted");
        }
        handled
    }

    /// Every send so far.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.gateway.sent().expect("gateway lock")
    }
}

/// Provides a fresh guild service.
#[fixture]
pub fn guilds() -> TestGuildService {
    GuildService::new(
        Arc::new(InMemoryGuildRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Builds a bot with the built-in commands on a caller-supplied router.
pub fn bot_with(mut router: Router, guilds: TestGuildService, options: &DispatchOptions) -> TestBot {
    register_builtin(&mut router, &guilds, Some(UserId::new(OWNER)))
        .expect("built-in commands should register");
    let gateway = RecordingGateway::new();
    let dispatcher = Dispatcher::new(
        Arc::new(router),
        Arc::new(gateway.clone()),
        BotIdentity::new(UserId::new("42")),
        options,
    );
    TestBot {
        dispatcher,
        gateway,
        guilds,
    }
}

/// Provides a bot with prefix `!` and the built-in commands.
#[fixture]
pub fn bot(guilds: TestGuildService) -> TestBot {
    bot_with(Router::new(), guilds, &DispatchOptions::new("!"))
}
