//! Example data configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Users generated when no count is configured.
pub const DEFAULT_COUNT: usize = 5;
/// Generator seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Settings controlling example user seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed the in-memory store on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Number of users to generate.
    pub count: Option<usize>,
    /// Generator seed; the same seed yields the same users.
    pub seed: Option<u64>,
}

impl ExampleDataSettings {
    /// Whether seeding should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Configured count, falling back to [`DEFAULT_COUNT`].
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Configured seed, falling back to [`DEFAULT_SEED`].
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
