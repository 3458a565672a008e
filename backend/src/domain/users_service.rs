//! User directory domain service.
//!
//! Implements the driving ports on top of any [`UserRepository`] and maps
//! storage failures onto the transport-neutral [`Error`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserFields, UserId};

/// Service backing both [`UsersQuery`] and [`UsersCommand`].
///
/// `R` may be unsized, such as `dyn UserRepository`.
pub struct UserDirectoryService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserDirectoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserDirectoryService<R> {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository + ?Sized,
{
    fn map_persistence_error(operation: &'static str, err: UserPersistenceError) -> Error {
        error!(operation, error = %err, "user repository failure");
        match err {
            UserPersistenceError::Storage { message } => {
                Error::internal(format!("user store unavailable: {message}"))
            }
            UserPersistenceError::Format { message } => {
                Error::internal(format!("user store corrupt: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserDirectoryService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .list()
            .await
            .map_err(|err| Self::map_persistence_error("list", err))?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }
}

#[async_trait]
impl<R> UsersCommand for UserDirectoryService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, fields: UserFields) -> Result<User, Error> {
        let user = self
            .repository
            .create(fields)
            .await
            .map_err(|err| Self::map_persistence_error("create", err))?;
        info!(user_id = %user.id(), "created user");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, patch: UserFields) -> Result<Option<User>, Error> {
        let updated = self
            .repository
            .update(id, patch)
            .await
            .map_err(|err| Self::map_persistence_error("update", err))?;
        match &updated {
            Some(_) => info!(user_id = %id, "updated user"),
            None => debug!(user_id = %id, "update ignored; no such user"),
        }
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(|err| Self::map_persistence_error("delete", err))?;
        if removed {
            info!(user_id = %id, "deleted user");
        } else {
            debug!(user_id = %id, "delete ignored; no such user");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
