//! Driving port for reading the user collection.
//!
//! HTTP handlers call this port and never see the storage adapter behind it.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Read side of the user directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// The whole collection, unfiltered, in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
