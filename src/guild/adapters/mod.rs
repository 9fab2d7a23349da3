//! Adapter implementations for guild persistence.

pub mod memory;

pub use memory::InMemoryGuildRepository;
