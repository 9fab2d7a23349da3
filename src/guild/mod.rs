//! Per-guild state for PartsBot.
//!
//! Tracks which guilds the bot has joined, their feature toggles and how
//! many lookups each has requested. The module follows the same hexagonal
//! layout as [`crate::dispatch`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
