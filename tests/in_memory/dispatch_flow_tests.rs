//! End-to-end dispatch through the built-in commands.

use async_trait::async_trait;
use partsbot::dispatch::adapters::SentMessage;
use partsbot::dispatch::domain::{
    ChannelId, EventKind, GatewayEvent, InboundMessage, InteractionEvent, MessageId, UserId,
};
use partsbot::dispatch::ports::{FallbackProcessor, HandlerError, InteractionContext, InteractionHandler};
use partsbot::dispatch::services::{DispatchOptions, Router};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::in_memory::helpers::{TestBot, TestGuildService, bot, bot_with, guilds};

struct PartSelect;

#[async_trait]
impl InteractionHandler for PartSelect {
    async fn handle(&self, context: InteractionContext) -> Result<(), HandlerError> {
        let part = context.event.values.first().map_or("nothing", String::as_str);
        let reply = format!("showing {} for {part}", context.event.payload());
        context
            .gateway
            .send_message(&context.event.channel_id, &reply)
            .await?;
        Ok(())
    }
}

#[derive(Default)]
struct LinkPreview {
    seen: AtomicUsize,
}

#[async_trait]
impl FallbackProcessor for LinkPreview {
    async fn process(&self, message: &InboundMessage) -> bool {
        let is_link = message.content.contains("pcpartpicker.com/");
        if is_link {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
        is_link
    }
}

fn text(content: &str) -> SentMessage {
    SentMessage::Text {
        channel: ChannelId::new("parts"),
        content: content.to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn lenient_collapse_folds_surplus_into_the_last_argument(bot: TestBot) {
    let handled = bot.send("7", "!help settings please").await;

    assert!(handled);
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent.iter().all(|reply| reply.contains("Couldn't find command 'settings please'.")));
}

#[rstest]
#[tokio::test]
async fn strict_mode_rejects_surplus_tokens(guilds: TestGuildService) {
    let mut options = DispatchOptions::new("!");
    options.strict_greedy = true;
    let strict = bot_with(Router::new(), guilds, &options);

    assert!(strict.send("7", "!help settings please").await);
    assert_eq!(strict.sent(), [text("incorrect command usage")]);
}

#[rstest]
#[tokio::test]
async fn self_authored_commands_are_never_answered(bot: TestBot) {
    assert!(bot.send("42", "!help").await);
    assert!(bot.sent().is_empty());
}

#[rstest]
#[case("pc!help")]
#[case("help")]
#[case("<@43> help")]
#[tokio::test]
async fn other_prefixes_are_not_commands(bot: TestBot, #[case] content: &str) {
    assert!(!bot.send("7", content).await);
    assert!(bot.sent().is_empty());
}

#[rstest]
#[tokio::test]
async fn component_interactions_reach_their_subhandler(guilds: TestGuildService) {
    let mut router = Router::new();
    router
        .register_subhandler(EventKind::MessageComponent, "partSelect", PartSelect)
        .expect("partSelect registers");
    let bot = bot_with(router, guilds, &DispatchOptions::new("!"));
    let event = InteractionEvent::new(
        EventKind::MessageComponent,
        "PARTSELECT price",
        ChannelId::new("parts"),
        UserId::new("7"),
    )
    .with_values(["8xr9g3"]);
    let modal = InteractionEvent::new(
        EventKind::ModalSubmit,
        "partselect price",
        ChannelId::new("parts"),
        UserId::new("7"),
    );

    assert!(bot.dispatcher.on_event(&GatewayEvent::InteractionCreate(event)).await);
    bot.dispatcher.on_interaction(&modal).await;

    assert_eq!(bot.sent(), [text("showing price for 8xr9g3")]);
}

#[rstest]
#[tokio::test]
async fn fallback_sees_only_plain_messages(bot: TestBot) {
    let preview = Arc::new(LinkPreview::default());
    let dispatcher = bot
        .dispatcher
        .clone()
        .with_fallback(Arc::clone(&preview) as Arc<dyn FallbackProcessor>);
    let message = |content: &str| {
        GatewayEvent::MessageCreate(InboundMessage::new(
            MessageId::new("m-9"),
            ChannelId::new("parts"),
            UserId::new("7"),
            content,
        ))
    };

    let link = dispatcher
        .on_event(&message("look https://pcpartpicker.com/list/abc"))
        .await;
    let chatter = dispatcher.on_event(&message("nice build")).await;
    let command = dispatcher
        .on_event(&message("!help https://pcpartpicker.com/list/abc"))
        .await;

    assert!(link);
    assert!(!chatter);
    assert!(command);
    assert_eq!(preview.seen.load(Ordering::SeqCst), 1);
}
