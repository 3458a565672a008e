//! Process-local user repository.
//!
//! The default storage adapter. Contents vanish when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserCollection, UserFields, UserId};

/// [`UserRepository`] holding a [`UserCollection`] behind an async lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    collection: RwLock<UserCollection>,
}

impl InMemoryUserRepository {
    /// Empty repository; the first created record gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `seed`, assigning ids in order.
    ///
    /// # Examples
    /// ```
    /// use roster_backend::domain::UserFields;
    /// use roster_backend::outbound::persistence::InMemoryUserRepository;
    ///
    /// let repo = InMemoryUserRepository::seeded([UserFields::new(
    ///     "Ada", "Lovelace", "9876543210", "ada@example.com",
    /// )]);
    /// # drop(repo);
    /// ```
    pub fn seeded(seed: impl IntoIterator<Item = UserFields>) -> Self {
        let mut collection = UserCollection::new();
        for fields in seed {
            collection.insert(fields);
        }
        Self {
            collection: RwLock::new(collection),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.collection.read().await.users().to_vec())
    }

    async fn create(&self, fields: UserFields) -> Result<User, UserPersistenceError> {
        Ok(self.collection.write().await.insert(fields))
    }

    async fn update(
        &self,
        id: UserId,
        patch: UserFields,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.collection.write().await.update(id, patch))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.collection.write().await.remove(id))
    }
}
