//! Persistent per-guild state.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::GuildSettings;
use crate::dispatch::domain::GuildId;

/// Stored state for one guild the bot has joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRecord {
    id: GuildId,
    settings: GuildSettings,
    requests: u64,
    joined_at: DateTime<Utc>,
}

impl GuildRecord {
    /// Creates a record with default settings and no requests.
    #[must_use]
    pub fn new(id: GuildId, clock: &impl Clock) -> Self {
        Self {
            id,
            settings: GuildSettings::default(),
            requests: 0,
            joined_at: clock.utc(),
        }
    }

    /// Guild identifier.
    #[must_use]
    pub const fn id(&self) -> &GuildId {
        &self.id
    }

    /// Current feature toggles.
    #[must_use]
    pub const fn settings(&self) -> GuildSettings {
        self.settings
    }

    /// Number of part lookups served for the guild.
    #[must_use]
    pub const fn requests(&self) -> u64 {
        self.requests
    }

    /// When the record was first created.
    #[must_use]
    pub const fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    /// Replaces the feature toggles.
    pub const fn set_settings(&mut self, settings: GuildSettings) {
        self.settings = settings;
    }

    /// Counts one more request.
    pub const fn record_request(&mut self) {
        self.requests = self.requests.saturating_add(1);
    }
}
