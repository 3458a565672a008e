//! Searchable list view with invalidate-and-reload semantics.

use tracing::{debug, warn};

use crate::api::UsersGateway;
use crate::confirm::DeleteConfirmation;
use crate::record::UserRecord;
use crate::search::filter_users;

/// Banner shown when the collection cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users";

/// Result of [`UserListView::confirm_delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No confirmation was open.
    NothingPending,
    /// The record was deleted and the list reloaded.
    Deleted(u64),
    /// The delete call failed; the message is suitable for an alert.
    Failed(String),
}

/// Client-side copy of the collection plus the active search query.
///
/// The filter is applied on read, so every reload is filtered with the
/// current query. A failed reload keeps the previous rows and raises the
/// error banner.
#[derive(Debug, Clone, Default)]
pub struct UserListView {
    users: Vec<UserRecord>,
    query: String,
    error: Option<String>,
    confirmation: DeleteConfirmation,
}

impl UserListView {
    /// Empty view; call [`UserListView::reload`] to populate it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetched record.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Look up a fetched record by id.
    #[must_use]
    pub fn find(&self, id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Active search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching the active query.
    #[must_use]
    pub fn visible(&self) -> Vec<&UserRecord> {
        filter_users(&self.users, &self.query)
    }

    /// Page-level error banner, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-fetch the collection, reporting whether it succeeded.
    pub async fn reload<G>(&mut self, gateway: &G) -> bool
    where
        G: UsersGateway + ?Sized,
    {
        match gateway.list_users().await {
            Ok(users) => {
                debug!(count = users.len(), "user list reloaded");
                self.users = users;
                self.error = None;
                true
            }
            Err(err) => {
                warn!(error = %err, "user list reload failed");
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
                false
            }
        }
    }

    /// Open the delete confirmation for record `id`.
    ///
    /// Returns the pending record, or `None` when `id` is not in the list.
    pub fn request_delete(&mut self, id: u64) -> Option<&UserRecord> {
        let record = self.find(id)?.clone();
        self.confirmation.open(record);
        self.confirmation.pending()
    }

    /// Record awaiting delete confirmation.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<&UserRecord> {
        self.confirmation.pending()
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.confirmation.cancel();
    }

    /// Delete the pending record and reload on success.
    pub async fn confirm_delete<G>(&mut self, gateway: &G) -> DeleteOutcome
    where
        G: UsersGateway + ?Sized,
    {
        let Some(target) = self.confirmation.confirm() else {
            return DeleteOutcome::NothingPending;
        };
        match gateway.delete_user(target.id).await {
            Ok(()) => {
                self.reload(gateway).await;
                DeleteOutcome::Deleted(target.id)
            }
            Err(err) => {
                warn!(error = %err, id = target.id, "deleting user failed");
                DeleteOutcome::Failed(format!("Error deleting user: {err}"))
            }
        }
    }
}
