//! Then steps for message dispatch BDD scenarios.

use super::world::{MessageWorld, run_async};
use partsbot::dispatch::adapters::SentMessage;
use partsbot::dispatch::domain::{Embed, GuildId};
use partsbot::guild::domain::SettingFlag;
use rstest_bdd_macros::then;

fn only_reply(world: &MessageWorld) -> Result<SentMessage, eyre::Report> {
    let sent = world
        .gateway
        .sent()
        .map_err(|err| eyre::eyre!("gateway lock failed: {err}"))?;
    match sent.as_slice() {
        [reply] => Ok(reply.clone()),
        other => Err(eyre::eyre!("expected exactly one reply, found {other:?}")),
    }
}

fn only_embed(world: &MessageWorld) -> Result<Embed, eyre::Report> {
    match only_reply(world)? {
        SentMessage::Embed { embed, .. } => Ok(embed),
        SentMessage::Text { content, .. } => {
            Err(eyre::eyre!("expected an embed, found text {content:?}"))
        }
    }
}

#[then("the message is handled")]
fn message_handled(world: &MessageWorld) -> Result<(), eyre::Report> {
    if world.handled != Some(true) {
        return Err(eyre::eyre!("expected handled, found {:?}", world.handled));
    }
    Ok(())
}

#[then("the message is not handled")]
fn message_not_handled(world: &MessageWorld) -> Result<(), eyre::Report> {
    if world.handled != Some(false) {
        return Err(eyre::eyre!("expected not handled, found {:?}", world.handled));
    }
    Ok(())
}

#[then(r#"the bot replies "{reply}""#)]
fn bot_replies_text(world: &MessageWorld, reply: String) -> Result<(), eyre::Report> {
    match only_reply(world)? {
        SentMessage::Text { content, .. } if content == reply => Ok(()),
        other => Err(eyre::eyre!("expected text {reply:?}, found {other:?}")),
    }
}

#[then(r#"the bot replies with an embed titled "{title}""#)]
fn bot_replies_embed(world: &MessageWorld, title: String) -> Result<(), eyre::Report> {
    let embed = only_embed(world)?;
    if embed.title.as_deref() != Some(title.as_str()) {
        return Err(eyre::eyre!("expected title {title:?}, found {:?}", embed.title));
    }
    Ok(())
}

#[then(r#"the bot replies with an embed described as "{description}""#)]
fn bot_replies_description(world: &MessageWorld, description: String) -> Result<(), eyre::Report> {
    let embed = only_embed(world)?;
    if embed.description.as_deref() != Some(description.as_str()) {
        return Err(eyre::eyre!(
            "expected description {description:?}, found {:?}",
            embed.description
        ));
    }
    Ok(())
}

#[then(r#"the reply mentions "{needle}""#)]
fn reply_mentions(world: &MessageWorld, needle: String) -> Result<(), eyre::Report> {
    let reply = only_reply(world)?;
    if !reply.contains(&needle) {
        return Err(eyre::eyre!("expected {needle:?} in {reply:?}"));
    }
    Ok(())
}

#[then("the bot sends nothing")]
fn bot_sends_nothing(world: &MessageWorld) -> Result<(), eyre::Report> {
    let sent = world
        .gateway
        .sent()
        .map_err(|err| eyre::eyre!("gateway lock failed: {err}"))?;
    if !sent.is_empty() {
        return Err(eyre::eyre!("expected no sends, found {sent:?}"));
    }
    Ok(())
}

#[then(r#"setting "{name}" is off for guild "{guild}""#)]
fn setting_is_off(world: &MessageWorld, name: String, guild: String) -> Result<(), eyre::Report> {
    let flag = SettingFlag::parse(&name).ok_or_else(|| eyre::eyre!("unknown setting {name}"))?;
    let settings = run_async(world.guilds.settings(&GuildId::new(guild.as_str())))
        .map_err(|err| eyre::eyre!("settings lookup failed: {err}"))?;
    if settings.contains(flag) {
        return Err(eyre::eyre!("expected {name} to be off"));
    }
    Ok(())
}
