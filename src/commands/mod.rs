//! Built-in text commands.
//!
//! `help` reads the frozen router; `settings` and `cleardb` go through the
//! [`GuildService`].

use mockable::Clock;

use crate::dispatch::domain::{RegistrationError, UserId};
use crate::dispatch::services::Router;
use crate::guild::{ports::GuildRepository, services::GuildService};

mod admin;
mod help;
mod settings;

pub use admin::ClearDbCommand;
pub use help::HelpCommand;
pub use settings::SettingsCommand;

/// Registers `help`, `settings` and `cleardb` on `router`.
///
/// `owner` is the only user allowed to run `cleardb`.
///
/// # Errors
///
/// Returns [`RegistrationError`] when a built-in definition is rejected.
pub fn register_builtin<R, C>(
    router: &mut Router,
    guilds: &GuildService<R, C>,
    owner: Option<UserId>,
) -> Result<(), RegistrationError>
where
    R: GuildRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    router.register(HelpCommand::definition())?;
    router.register(SettingsCommand::definition(guilds.clone()))?;
    router.register(ClearDbCommand::definition(guilds.clone(), owner))?;
    Ok(())
}
