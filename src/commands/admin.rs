//! Owner-only maintenance commands.

use async_trait::async_trait;
use mockable::Clock;
use tracing::warn;

use crate::dispatch::domain::{ArgumentSpec, CommandDefinition, UserId};
use crate::dispatch::ports::{CommandContext, CommandHandler, HandlerError};
use crate::guild::{ports::GuildRepository, services::GuildService};

const REFUSAL_REPLY: &str = "Only the bot owner can use this command.";

/// Deletes every document in a storage collection.
///
/// Refuses everyone when no owner is configured.
pub struct ClearDbCommand<R, C>
where
    R: GuildRepository,
    C: Clock + Send + Sync,
{
    guilds: GuildService<R, C>,
    owner: Option<UserId>,
}

impl<R, C> ClearDbCommand<R, C>
where
    R: GuildRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates the handler.
    #[must_use]
    pub const fn new(guilds: GuildService<R, C>, owner: Option<UserId>) -> Self {
        Self { guilds, owner }
    }

    /// The command definition, with alias `dbclear`.
    #[must_use]
    pub fn definition(guilds: GuildService<R, C>, owner: Option<UserId>) -> CommandDefinition {
        CommandDefinition::new(
            "cleardb",
            "Clears all items in the database for a specific collection.",
            Self::new(guilds, owner),
        )
        .with_argument(ArgumentSpec::required("colName"))
        .with_alias("dbclear")
    }
}

#[async_trait]
impl<R, C> CommandHandler for ClearDbCommand<R, C>
where
    R: GuildRepository,
    C: Clock + Send + Sync,
{
    async fn handle(&self, context: CommandContext) -> Result<(), HandlerError> {
        if self.owner.as_ref() != Some(&context.message.author_id) {
            warn!(author = %context.message.author_id, "refused cleardb");
            return context.reply(REFUSAL_REPLY).await;
        }
        let collection = context
            .arguments
            .get("colName")
            .ok_or_else(|| HandlerError::Failed("missing collection name".to_owned()))?;
        let deleted = self
            .guilds
            .clear_collection(collection)
            .await
            .map_err(HandlerError::dependency)?;
        context
            .reply(&format!("Deleted {deleted} document(s)"))
            .await
    }
}
