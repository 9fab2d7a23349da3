//! Shared world state for message dispatch BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use partsbot::dispatch::adapters::RecordingGateway;
use partsbot::dispatch::services::Dispatcher;
use partsbot::guild::{adapters::InMemoryGuildRepository, services::GuildService};
use rstest::fixture;

/// Guild service type used by the BDD world.
pub type TestGuildService = GuildService<InMemoryGuildRepository, DefaultClock>;

/// Scenario world for message dispatch behaviour tests.
pub struct MessageWorld {
    pub guilds: TestGuildService,
    pub gateway: RecordingGateway,
    pub dispatcher: Option<Dispatcher>,
    pub guild: Option<String>,
    pub handled: Option<bool>,
}

impl MessageWorld {
    /// Creates a world with no dispatcher yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            guilds: GuildService::new(
                Arc::new(InMemoryGuildRepository::new()),
                Arc::new(DefaultClock),
            ),
            gateway: RecordingGateway::new(),
            dispatcher: None,
            guild: None,
            handled: None,
        }
    }
}

impl Default for MessageWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessageWorld {
    MessageWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
