//! Given steps for message dispatch BDD scenarios.

use std::sync::Arc;

use super::world::{MessageWorld, run_async};
use eyre::WrapErr;
use partsbot::commands::register_builtin;
use partsbot::dispatch::domain::{BotIdentity, GuildId, UserId};
use partsbot::dispatch::services::{DispatchOptions, Dispatcher, Router};
use rstest_bdd_macros::given;

#[given(r#"a bot with prefix "{prefix}" and the built-in commands"#)]
fn bot_with_builtins(world: &mut MessageWorld, prefix: String) -> Result<(), eyre::Report> {
    let mut router = Router::new();
    register_builtin(&mut router, &world.guilds, Some(UserId::new("405")))
        .wrap_err("register built-in commands")?;
    world.dispatcher = Some(Dispatcher::new(
        Arc::new(router),
        Arc::new(world.gateway.clone()),
        BotIdentity::new(UserId::new("42")),
        &DispatchOptions::new(prefix),
    ));
    Ok(())
}

#[given(r#"the bot has joined guild "{guild}""#)]
fn bot_joined_guild(world: &mut MessageWorld, guild: String) -> Result<(), eyre::Report> {
    run_async(world.guilds.ensure_registered(&GuildId::new(guild.as_str())))
        .wrap_err("register guild")?;
    world.guild = Some(guild);
    Ok(())
}
