//! Startup wiring for example data seeding.

mod config;
mod startup;

pub use config::{DEFAULT_COUNT, DEFAULT_SEED, ExampleDataSettings};
pub use startup::{StartupSeedingError, example_users_for_startup};
