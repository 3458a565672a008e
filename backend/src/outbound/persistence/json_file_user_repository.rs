//! User repository persisted as a single JSON document.
//!
//! The document holds the ordered records and the next id:
//!
//! ```json
//! {"nextId": 3, "users": [{"id": 1, "firstName": "Ada", ...}]}
//! ```
//!
//! It is loaded once when the repository opens and rewritten atomically after
//! each mutation that changes the collection. A failed write leaves both the
//! file and the in-memory collection as they were.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::atomic_io::write_atomic;
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserCollection, UserFields, UserId};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDocument {
    #[serde(default = "first_id")]
    next_id: UserId,
    #[serde(default)]
    users: Vec<User>,
}

fn first_id() -> UserId {
    UserId::FIRST
}

/// [`UserRepository`] backed by a JSON file.
#[derive(Debug)]
pub struct JsonFileUserRepository {
    dir: Arc<Dir>,
    file_name: String,
    path: PathBuf,
    collection: RwLock<UserCollection>,
}

impl JsonFileUserRepository {
    /// Open the store at `path`, creating an empty collection when the file
    /// does not exist yet. The parent directory must exist.
    ///
    /// # Errors
    ///
    /// [`UserPersistenceError::Storage`] when the directory or file cannot be
    /// read, and [`UserPersistenceError::Format`] when the document does not
    /// parse.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UserPersistenceError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                UserPersistenceError::storage(format!(
                    "{} does not name a UTF-8 file",
                    path.display()
                ))
            })?
            .to_owned();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| storage_error(parent, &err))?;

        let collection = match dir.read_to_string(&file_name) {
            Ok(text) => {
                let stored: StoredDocument = serde_json::from_str(&text).map_err(|err| {
                    UserPersistenceError::format(format!("{}: {err}", path.display()))
                })?;
                UserCollection::from_parts(stored.next_id, stored.users)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "user store absent; starting empty");
                UserCollection::new()
            }
            Err(err) => return Err(storage_error(path, &err)),
        };
        info!(
            path = %path.display(),
            users = collection.len(),
            next_id = %collection.next_id(),
            "opened user store"
        );

        Ok(Self {
            dir: Arc::new(dir),
            file_name,
            path: path.to_path_buf(),
            collection: RwLock::new(collection),
        })
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `collection` from the blocking pool.
    async fn persist(&self, collection: &UserCollection) -> Result<(), UserPersistenceError> {
        let bytes = serde_json::to_vec_pretty(collection)
            .map_err(|err| UserPersistenceError::format(err.to_string()))?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &file_name, &bytes))
            .await
            .map_err(|err| UserPersistenceError::storage(format!("store write task failed: {err}")))?
            .map_err(|err| storage_error(&self.path, &err))
    }

    /// Apply `mutate` to a copy, persist it when `changed` says so, then
    /// publish the copy.
    ///
    /// The write lock is held until the file is replaced, so writes land in
    /// the order the mutations were applied.
    async fn mutate<T>(
        &self,
        mutate: impl FnOnce(&mut UserCollection) -> T,
        changed: impl FnOnce(&T) -> bool,
    ) -> Result<T, UserPersistenceError> {
        let mut guard = self.collection.write().await;
        let mut draft = guard.clone();
        let outcome = mutate(&mut draft);
        if changed(&outcome) {
            self.persist(&draft).await?;
            *guard = draft;
        }
        Ok(outcome)
    }
}

fn storage_error(path: &Path, err: &io::Error) -> UserPersistenceError {
    UserPersistenceError::storage(format!("{}: {err}", path.display()))
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.collection.read().await.users().to_vec())
    }

    async fn create(&self, fields: UserFields) -> Result<User, UserPersistenceError> {
        self.mutate(|draft| draft.insert(fields), |_| true).await
    }

    async fn update(
        &self,
        id: UserId,
        patch: UserFields,
    ) -> Result<Option<User>, UserPersistenceError> {
        self.mutate(|draft| draft.update(id, patch), Option::is_some)
            .await
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        self.mutate(|draft| draft.remove(id), |removed| *removed)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PHONE_NUMBER;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    fn fields(first: &str) -> UserFields {
        UserFields::new(first, "Tester", "9876543210", format!("{first}@x.com"))
    }

    #[fixture]
    fn store_dir() -> TempDir {
        TempDir::new().expect("temp dir")
    }

    #[rstest]
    #[tokio::test]
    async fn missing_file_opens_empty(store_dir: TempDir) {
        let repo = JsonFileUserRepository::open(store_dir.path().join("users.json"))
            .expect("open store");
        assert!(repo.list().await.expect("list").is_empty());
        assert!(!store_dir.path().join("users.json").exists());
    }

    #[rstest]
    #[tokio::test]
    async fn reopen_restores_records_and_next_id(store_dir: TempDir) {
        let path = store_dir.path().join("users.json");
        {
            let repo = JsonFileUserRepository::open(&path).expect("open store");
            repo.create(fields("Alice")).await.expect("create");
            repo.create(fields("Bob")).await.expect("create");
            assert!(repo.delete(UserId::new(2)).await.expect("delete"));
        }

        let reopened = JsonFileUserRepository::open(&path).expect("reopen store");
        let users = reopened.list().await.expect("list");
        assert_eq!(users.len(), 1);
        assert_eq!(users.first().map(User::id), Some(UserId::new(1)));

        let created = reopened.create(fields("Carol")).await.expect("create");
        assert_eq!(created.id(), UserId::new(3));
    }

    #[rstest]
    #[tokio::test]
    async fn update_is_persisted(store_dir: TempDir) {
        let path = store_dir.path().join("users.json");
        let repo = JsonFileUserRepository::open(&path).expect("open store");
        repo.create(fields("Alice")).await.expect("create");
        repo.update(
            UserId::new(1),
            UserFields::default().with(PHONE_NUMBER, "9000000000"),
        )
        .await
        .expect("update");

        let text = std::fs::read_to_string(&path).expect("read store");
        let document: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(document["nextId"], 2);
        assert_eq!(document["users"][0]["phoneNumber"], "9000000000");
        assert_eq!(document["users"][0]["firstName"], "Alice");
    }

    #[rstest]
    #[tokio::test]
    async fn no_op_mutations_do_not_write(store_dir: TempDir) {
        let path = store_dir.path().join("users.json");
        let repo = JsonFileUserRepository::open(&path).expect("open store");

        assert!(repo.update(UserId::new(5), fields("Zed")).await.expect("update").is_none());
        assert!(!repo.delete(UserId::new(5)).await.expect("delete"));
        assert!(!path.exists());
    }

    #[rstest]
    fn malformed_document_is_a_format_error(store_dir: TempDir) {
        let path = store_dir.path().join("users.json");
        std::fs::write(&path, "{ not json").expect("write fixture");

        let err = JsonFileUserRepository::open(&path).expect_err("open fails");
        assert!(matches!(err, UserPersistenceError::Format { .. }));
    }

    #[rstest]
    fn missing_parent_directory_is_a_storage_error(store_dir: TempDir) {
        let path = store_dir.path().join("absent").join("users.json");

        let err = JsonFileUserRepository::open(&path).expect_err("open fails");
        assert!(matches!(err, UserPersistenceError::Storage { .. }));
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_creates_are_all_persisted(store_dir: TempDir) {
        let path = store_dir.path().join("users.json");
        let repo = Arc::new(JsonFileUserRepository::open(&path).expect("open store"));

        let tasks: Vec<_> = ["Alice", "Bob", "Carol", "Dan"]
            .into_iter()
            .map(|name| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create(fields(name)).await })
            })
            .collect();
        for task in tasks {
            task.await.expect("task joins").expect("create");
        }

        let reopened = JsonFileUserRepository::open(&path).expect("reopen store");
        let mut ids: Vec<u64> = reopened
            .list()
            .await
            .expect("list")
            .iter()
            .map(|user| user.id().get())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
