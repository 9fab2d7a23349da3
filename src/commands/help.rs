//! The `help` command.

use async_trait::async_trait;

use crate::dispatch::domain::{ArgumentSpec, CommandDefinition, Embed};
use crate::dispatch::ports::{CommandContext, CommandHandler, HandlerError};

/// Shows usage for one command, or lists every command.
pub struct HelpCommand;

impl HelpCommand {
    /// The command definition, with alias `commands`.
    #[must_use]
    pub fn definition() -> CommandDefinition {
        CommandDefinition::new(
            "Help",
            "Shows usage and description for a command. If no command is provided, shows all commands.",
            Self,
        )
        .with_argument(ArgumentSpec::optional("commandName"))
        .with_alias("commands")
    }
}

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn handle(&self, context: CommandContext) -> Result<(), HandlerError> {
        let embed = context.arguments.get("commandName").map_or_else(
            || {
                Embed::new()
                    .with_title("Commands")
                    .with_description(context.router.commands().list_names().join(", "))
            },
            |requested| describe(&context, requested),
        );
        context.reply_embed(embed).await
    }
}

fn describe(context: &CommandContext, requested: &str) -> Embed {
    let Some(definition) = context.router.resolve_command(requested) else {
        return Embed::error(format!("Couldn't find command '{requested}'."));
    };
    let embed = Embed::new()
        .with_title(definition.display_name())
        .with_field("Usage", format!("`{}`", definition.usage(&context.prefix)))
        .with_field("Description", definition.description());
    let aliases: Vec<&str> = definition.extra_aliases().collect();
    if aliases.is_empty() {
        embed
    } else {
        embed.with_field("Aliases", aliases.join(", "))
    }
}
