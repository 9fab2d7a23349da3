//! In-memory guild repository for tests and the console binary.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dispatch::domain::GuildId;
use crate::guild::{
    domain::{GuildRecord, GuildSettings},
    ports::{GUILDS_COLLECTION, GuildRepository, GuildRepositoryError, GuildRepositoryResult},
};

/// Thread-safe in-memory guild repository.
///
/// Only the guilds collection holds documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGuildRepository {
    state: Arc<RwLock<HashMap<GuildId, GuildRecord>>>,
}

impl InMemoryGuildRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> GuildRepositoryResult<RwLockReadGuard<'_, HashMap<GuildId, GuildRecord>>> {
        self.state.read().map_err(|err| {
            GuildRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(
        &self,
    ) -> GuildRepositoryResult<RwLockWriteGuard<'_, HashMap<GuildId, GuildRecord>>> {
        self.state.write().map_err(|err| {
            GuildRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl GuildRepository for InMemoryGuildRepository {
    async fn find(&self, id: &GuildId) -> GuildRepositoryResult<Option<GuildRecord>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn insert(&self, record: &GuildRecord) -> GuildRepositoryResult<()> {
        let mut guilds = self.write()?;
        if guilds.contains_key(record.id()) {
            return Err(GuildRepositoryError::Duplicate(record.id().clone()));
        }
        guilds.insert(record.id().clone(), record.clone());
        Ok(())
    }

    async fn update_settings(
        &self,
        id: &GuildId,
        settings: GuildSettings,
    ) -> GuildRepositoryResult<()> {
        let mut guilds = self.write()?;
        let record = guilds
            .get_mut(id)
            .ok_or_else(|| GuildRepositoryError::NotFound(id.clone()))?;
        record.set_settings(settings);
        Ok(())
    }

    async fn increment_requests(&self, id: &GuildId) -> GuildRepositoryResult<u64> {
        let mut guilds = self.write()?;
        let record = guilds
            .get_mut(id)
            .ok_or_else(|| GuildRepositoryError::NotFound(id.clone()))?;
        record.record_request();
        Ok(record.requests())
    }

    async fn clear_collection(&self, collection: &str) -> GuildRepositoryResult<u64> {
        if collection != GUILDS_COLLECTION {
            return Ok(0);
        }
        let mut guilds = self.write()?;
        let deleted = u64::try_from(guilds.len()).unwrap_or(u64::MAX);
        guilds.clear();
        Ok(deleted)
    }
}
