//! Step definitions for message dispatch scenarios.

mod given;
mod then;
mod when;
pub mod world;
