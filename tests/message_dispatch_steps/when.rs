//! When steps for message dispatch BDD scenarios.

use super::world::{MessageWorld, run_async};
use eyre::WrapErr;
use partsbot::dispatch::domain::{ChannelId, GuildId, InboundMessage, MessageId, UserId};
use partsbot::dispatch::services::MessageDispatch;
use rstest_bdd_macros::when;

#[when(r#"user "{author}" sends "{content}""#)]
fn user_sends(
    world: &mut MessageWorld,
    author: String,
    content: String,
) -> Result<(), eyre::Report> {
    let dispatcher = world
        .dispatcher
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing dispatcher in scenario world"))?;
    let mut message = InboundMessage::new(
        MessageId::new("m-1"),
        ChannelId::new("parts"),
        UserId::new(author),
        content,
    );
    message.guild_id = world.guild.as_deref().map(GuildId::new);

    let outcome = run_async(dispatcher.dispatch_message(&message));
    world.handled = Some(outcome.is_handled());
    if let MessageDispatch::Launched { handle, .. } = outcome {
        run_async(handle).wrap_err("command task")?;
    }
    Ok(())
}
