//! Guild registration, settings and request accounting.

use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

use crate::dispatch::domain::GuildId;
use crate::guild::{
    domain::{GuildRecord, GuildSettings, SettingFlag},
    ports::{GuildRepository, GuildRepositoryError, GuildRepositoryResult},
};

/// Guild lifecycle orchestration service.
pub struct GuildService<R, C>
where
    R: GuildRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for GuildService<R, C>
where
    R: GuildRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> GuildService<R, C>
where
    R: GuildRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new guild service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a record for a newly joined guild.
    ///
    /// Returns `true` when a record was created and `false` when the guild
    /// was already known.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError`] when the repository fails.
    pub async fn ensure_registered(&self, id: &GuildId) -> GuildRepositoryResult<bool> {
        if self.repository.find(id).await?.is_some() {
            debug!(guild = %id, "guild already registered");
            return Ok(false);
        }
        let record = GuildRecord::new(id.clone(), self.clock.as_ref());
        match self.repository.insert(&record).await {
            Ok(()) => {
                info!(guild = %id, "registered guild");
                Ok(true)
            }
            Err(GuildRepositoryError::Duplicate(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Returns a guild's record, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError`] when the repository fails.
    pub async fn find(&self, id: &GuildId) -> GuildRepositoryResult<Option<GuildRecord>> {
        self.repository.find(id).await
    }

    /// Returns a guild's settings; unregistered guilds get the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError`] when the repository fails.
    pub async fn settings(&self, id: &GuildId) -> GuildRepositoryResult<GuildSettings> {
        Ok(self
            .repository
            .find(id)
            .await?
            .map(|record| record.settings())
            .unwrap_or_default())
    }

    /// Turns one flag on or off and returns the stored settings.
    ///
    /// Registers the guild first when it has no record.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError`] when the repository fails.
    pub async fn set_flag(
        &self,
        id: &GuildId,
        flag: SettingFlag,
        enabled: bool,
    ) -> GuildRepositoryResult<GuildSettings> {
        self.ensure_registered(id).await?;
        let updated = self.settings(id).await?.set(flag, enabled);
        self.repository.update_settings(id, updated).await?;
        debug!(guild = %id, %flag, enabled, "updated guild setting");
        Ok(updated)
    }

    /// Counts one served request for a guild.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError::NotFound`] when the guild has no record.
    pub async fn increment_requests(&self, id: &GuildId) -> GuildRepositoryResult<u64> {
        self.repository.increment_requests(id).await
    }

    /// Deletes every document in a collection and returns how many went.
    ///
    /// # Errors
    ///
    /// Returns [`GuildRepositoryError`] when the repository fails.
    pub async fn clear_collection(&self, collection: &str) -> GuildRepositoryResult<u64> {
        let deleted = self.repository.clear_collection(collection).await?;
        info!(collection, deleted, "cleared collection");
        Ok(deleted)
    }
}
