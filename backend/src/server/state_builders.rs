//! Repository selection and HTTP state assembly.

use std::sync::Arc;

use roster_backend::domain::ports::{UserPersistenceError, UserRepository};
use roster_backend::domain::{UserDirectoryService, UserFields};
use roster_backend::inbound::http::state::HttpState;
use roster_backend::outbound::persistence::{InMemoryUserRepository, JsonFileUserRepository};
use tracing::{info, warn};

use super::ServerConfig;

/// Pick the storage adapter: the JSON file store when a path is configured,
/// otherwise memory pre-populated with `seed`.
pub(crate) fn build_repository(
    config: &ServerConfig,
    seed: Vec<UserFields>,
) -> Result<Arc<dyn UserRepository>, UserPersistenceError> {
    match &config.store_path {
        Some(path) => {
            if !seed.is_empty() {
                warn!(
                    path = %path.display(),
                    "example data ignored; seeding only applies to the in-memory store"
                );
            }
            Ok(Arc::new(JsonFileUserRepository::open(path)?))
        }
        None => {
            info!(seeded = seed.len(), "using in-memory user store");
            Ok(Arc::new(InMemoryUserRepository::seeded(seed)))
        }
    }
}

/// Wrap a repository in the directory service and expose it as HTTP state.
pub(crate) fn build_http_state(repository: Arc<dyn UserRepository>) -> HttpState {
    HttpState::from_service(Arc::new(UserDirectoryService::new(repository)))
}
