//! Driven port for user record storage.
//!
//! Adapters own the ordered collection and the id counter. Every method is a
//! single atomic step with respect to concurrent callers.
use async_trait::async_trait;

use crate::domain::{User, UserFields, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Backing storage could not be read or written.
        Storage { message: String } => "user store I/O failed: {message}",
        /// Stored document could not be encoded or decoded.
        Format { message: String } => "user store document is invalid: {message}",
    }
}

/// Storage contract for the user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every record in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Append a record, assigning the next id.
    async fn create(&self, fields: UserFields) -> Result<User, UserPersistenceError>;

    /// Overlay `patch` onto the record with `id`.
    ///
    /// `Ok(None)` means no record matched and nothing changed.
    async fn update(
        &self,
        id: UserId,
        patch: UserFields,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove the record with `id`, returning whether one existed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
