//! Application services for the dispatch subsystem.
//!
//! The registries and validator are built and frozen at startup; the
//! dispatcher reads them on every inbound event.

mod dispatcher;
mod registry;
mod router;
mod subhandler;
mod supervisor;
mod validator;

pub use dispatcher::{DispatchOptions, Dispatcher, MessageDispatch};
pub use registry::CommandRegistry;
pub use router::Router;
pub use subhandler::SubhandlerRegistry;
pub use supervisor::{HandlerFault, launch};
pub use validator::ArgumentValidator;
