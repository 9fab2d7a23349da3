//! Guild orchestration services.

mod lifecycle;

pub use lifecycle::GuildService;
