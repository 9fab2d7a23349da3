//! PartsBot: command and interaction dispatch for a parts-lookup chat bot.
//!
//! This crate owns the routing tables, argument validation and per-event
//! dispatch of a prefix-driven chat bot, plus the small amount of per-guild
//! state its built-in commands need.
//!
//! # Architecture
//!
//! PartsBot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (console, in-memory)
//!
//! # Modules
//!
//! - [`dispatch`]: Command registry, argument validation and dispatch
//! - [`guild`]: Guild records, settings flags and request counts
//! - [`commands`]: Built-in `help`, `settings` and `cleardb` commands
//! - [`config`]: TOML configuration
//! - [`telemetry`]: `tracing` subscriber setup

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod guild;
pub mod telemetry;
