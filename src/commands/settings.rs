//! The `settings` command.

use async_trait::async_trait;
use mockable::Clock;

use crate::dispatch::domain::{ArgumentSpec, CommandDefinition, Embed};
use crate::dispatch::ports::{CommandContext, CommandHandler, HandlerError};
use crate::guild::{domain::SettingFlag, ports::GuildRepository, services::GuildService};

const GUILD_ONLY_REPLY: &str = "Settings can only be changed inside a server.";

/// Lists or toggles the current guild's feature flags.
pub struct SettingsCommand<R, C>
where
    R: GuildRepository,
    C: Clock + Send + Sync,
{
    guilds: GuildService<R, C>,
}

impl<R, C> SettingsCommand<R, C>
where
    R: GuildRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates the handler over a guild service.
    #[must_use]
    pub const fn new(guilds: GuildService<R, C>) -> Self {
        Self { guilds }
    }

    /// The command definition.
    #[must_use]
    pub fn definition(guilds: GuildService<R, C>) -> CommandDefinition {
        CommandDefinition::new(
            "settings",
            "Toggles a setting on or off. Use without any arguments to see list of settings and their values.",
            Self::new(guilds),
        )
        .with_argument(ArgumentSpec::optional("settingName"))
        .with_argument(ArgumentSpec::optional_choice("state", ["on", "off"]))
    }
}

#[async_trait]
impl<R, C> CommandHandler for SettingsCommand<R, C>
where
    R: GuildRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, context: CommandContext) -> Result<(), HandlerError> {
        let Some(guild) = context.message.guild_id.clone() else {
            return context.reply(GUILD_ONLY_REPLY).await;
        };

        let (Some(name), Some(state)) = (
            context.arguments.get("settingName"),
            context.arguments.get("state"),
        ) else {
            let settings = self
                .guilds
                .settings(&guild)
                .await
                .map_err(HandlerError::dependency)?;
            let listing: String = SettingFlag::ALL
                .into_iter()
                .map(|flag| {
                    let shown = if settings.contains(flag) { "on" } else { "off" };
                    format!("**{flag}:** {shown}\n")
                })
                .collect();
            let embed = Embed::new()
                .with_title("PartsBot settings")
                .with_description(listing);
            return context.reply_embed(embed).await;
        };

        let Some(flag) = SettingFlag::parse(name) else {
            let available: Vec<String> = SettingFlag::ALL
                .into_iter()
                .map(|flag| format!("`{flag}`"))
                .collect();
            let embed = Embed::new()
                .with_title("Invalid setting!")
                .with_description(format!(
                    "Available settings are:\n{}",
                    available.join(", ")
                ));
            return context.reply_embed(embed).await;
        };

        self.guilds
            .set_flag(&guild, flag, state == "on")
            .await
            .map_err(HandlerError::dependency)?;
        context
            .reply_embed(Embed::new().with_description(format!("Set {flag} to **{state}**.")))
            .await
    }
}
