//! Port trait definitions for the dispatch subsystem.
//!
//! Ports define the interfaces the dispatcher needs from the outside world:
//! the gateway it replies through, the handlers it routes to, and the
//! fallback processor for plain messages.

pub mod fallback;
pub mod gateway;
pub mod handler;

pub use fallback::FallbackProcessor;
pub use gateway::{ChatGateway, GatewayError, GatewayResult};
pub use handler::{
    CommandContext, CommandHandler, HandlerError, InteractionContext, InteractionHandler,
};
