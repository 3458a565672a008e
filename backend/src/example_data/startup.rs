//! Startup seeding of the in-memory user store.

use example_data::{ExampleUserSeed, GenerationError, generate_example_users};
use thiserror::Error;
use tracing::info;

use crate::domain::UserFields;
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while preparing startup seed records.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// The generator could not produce valid users.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl From<ExampleUserSeed> for UserFields {
    fn from(seed: ExampleUserSeed) -> Self {
        UserFields::new(
            seed.first_name,
            seed.last_name,
            seed.phone_number,
            seed.email_address,
        )
    }
}

/// Records to seed the in-memory store with, or an empty list when seeding
/// is disabled.
///
/// # Examples
///
/// ```rust
/// use roster_backend::example_data::{ExampleDataSettings, example_users_for_startup};
///
/// let settings = ExampleDataSettings {
///     enabled: true,
///     count: Some(2),
///     seed: None,
/// };
/// let users = example_users_for_startup(&settings).expect("generation succeeds");
/// assert_eq!(users.len(), 2);
/// ```
pub fn example_users_for_startup(
    settings: &ExampleDataSettings,
) -> Result<Vec<UserFields>, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(Vec::new());
    }

    let seed = settings.seed();
    let users = generate_example_users(seed, settings.count())?;
    info!(seed, user_count = users.len(), "example data seeding applied");
    Ok(users.into_iter().map(UserFields::from).collect())
}
