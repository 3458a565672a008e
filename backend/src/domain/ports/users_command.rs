//! Driving port for mutating the user collection.

use async_trait::async_trait;

use crate::domain::{Error, User, UserFields, UserId};

/// Write side of the user directory.
///
/// Unknown identifiers are not errors: `update_user` yields `Ok(None)` and
/// `delete_user` succeeds without touching the collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new record and return it with its assigned id.
    async fn create_user(&self, fields: UserFields) -> Result<User, Error>;

    /// Merge the supplied fields over the record with `id`.
    async fn update_user(&self, id: UserId, patch: UserFields) -> Result<Option<User>, Error>;

    /// Remove the record with `id` if present.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
