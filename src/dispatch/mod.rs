//! Command and interaction dispatch.
//!
//! Turns inbound chat messages and component interactions into validated,
//! routed handler invocations.
//!
//! # Architecture
//!
//! - **Domain**: command definitions, argument schemas, events ([`domain::CommandDefinition`], [`domain::ArgumentSpec`], [`domain::GatewayEvent`])
//! - **Ports**: handler and gateway traits ([`ports::CommandHandler`], [`ports::InteractionHandler`], [`ports::ChatGateway`])
//! - **Services**: routing tables, validation and dispatch ([`services::Router`], [`services::ArgumentValidator`], [`services::Dispatcher`])
//! - **Adapters**: in-memory and console gateways
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use partsbot::dispatch::domain::{ArgumentSpec, CommandDefinition};
//! use partsbot::dispatch::ports::{CommandContext, CommandHandler, HandlerError};
//! use partsbot::dispatch::services::Router;
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl CommandHandler for Echo {
//!     async fn handle(&self, context: CommandContext) -> Result<(), HandlerError> {
//!         context.reply(context.arguments.get("text").unwrap_or_default()).await
//!     }
//! }
//!
//! let mut router = Router::new();
//! router
//!     .register(
//!         CommandDefinition::new("Echo", "Repeats text.", Echo)
//!             .with_argument(ArgumentSpec::greedy("text"))
//!             .with_alias("say"),
//!     )
//!     .expect("valid schema");
//!
//! let echo = router.resolve_command("SAY").expect("alias resolves");
//! assert_eq!(echo.usage("!"), "!echo [text...]");
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
