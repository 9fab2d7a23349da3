//! Repository port for guild records.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::dispatch::domain::GuildId;
use crate::guild::domain::{GuildRecord, GuildSettings};

/// Collection holding guild records.
pub const GUILDS_COLLECTION: &str = "guilds";

/// Result type for guild repository operations.
pub type GuildRepositoryResult<T> = Result<T, GuildRepositoryError>;

/// Guild persistence contract.
#[async_trait]
pub trait GuildRepository: Send + Sync {
    /// Finds the record for a guild.
    ///
    /// Returns `None` when the guild has never been registered.
    async fn find(&self, id: &GuildId) -> GuildRepositoryResult<Option<GuildRecord>>;

    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError::Duplicate`] when the guild already has
    /// a record.
    async fn insert(&self, record: &GuildRecord) -> GuildRepositoryResult<()>;

    /// Replaces a guild's settings.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError::NotFound`] when the guild has no record.
    async fn update_settings(
        &self,
        id: &GuildId,
        settings: GuildSettings,
    ) -> GuildRepositoryResult<()>;

    /// Increments a guild's request counter and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError::NotFound`] when the guild has no record.
    async fn increment_requests(&self, id: &GuildId) -> GuildRepositoryResult<u64>;

    /// Deletes every document in the named collection.
    ///
    /// Returns the number of deleted documents; unknown collections are
    /// empty.
    async fn clear_collection(&self, collection: &str) -> GuildRepositoryResult<u64>;
}

/// Errors returned by guild repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GuildRepositoryError {
    /// The guild has no record.
    #[error("guild not found: {0}")]
    NotFound(GuildId),

    /// A record for the guild already exists.
    #[error("duplicate guild record: {0}")]
    Duplicate(GuildId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GuildRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
