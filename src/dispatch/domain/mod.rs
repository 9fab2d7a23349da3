//! Dispatch domain model.
//!
//! Command definitions, argument schemas, inbound events and the error
//! taxonomy shared by the registries and the dispatcher.

mod argument;
mod definition;
mod embed;
mod error;
mod event;
mod ids;
mod input;

pub use argument::{ArgumentSpec, ValidatedArguments};
pub use definition::CommandDefinition;
pub(crate) use definition::is_valid_token;
pub use embed::{ACCENT_COLOUR, Embed, EmbedField};
pub use error::{DispatchError, RegistrationError};
pub use event::{BotIdentity, EventKind, GatewayEvent, InboundMessage, InteractionEvent};
pub use ids::{ChannelId, GuildId, InvocationId, MessageId, UserId};
pub use input::TokenizedInput;
