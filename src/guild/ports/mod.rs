//! Port contracts for guild persistence.

pub mod repository;

pub use repository::{
    GUILDS_COLLECTION, GuildRepository, GuildRepositoryError, GuildRepositoryResult,
};
