//! Gateway adapters for the dispatch subsystem.

pub mod console;
pub mod memory;

pub use console::ConsoleGateway;
pub use memory::{RecordingGateway, SentMessage};
