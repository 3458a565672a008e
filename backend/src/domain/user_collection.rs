//! Ordered user collection with server-side identifier assignment.
//!
//! Storage adapters keep one of these behind a lock and persist it however
//! they like. All list semantics live here: insertion order, sequential ids,
//! in-place overlay, and no-op handling of unknown identifiers.

use serde::{Deserialize, Serialize};

use super::{User, UserFields, UserId};

/// Insertion-ordered set of records plus the next identifier to assign.
///
/// ## Invariants
/// - Every record id is unique.
/// - `next_id` is greater than every id ever assigned, so deleted ids are not
///   reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCollection {
    next_id: UserId,
    users: Vec<User>,
}

impl Default for UserCollection {
    fn default() -> Self {
        Self {
            next_id: UserId::FIRST,
            users: Vec::new(),
        }
    }
}

impl UserCollection {
    /// Empty collection whose first record gets [`UserId::FIRST`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a collection from stored parts.
    ///
    /// Duplicate ids are dropped, keeping the first occurrence, and
    /// `next_id` is raised past the largest stored id when needed.
    pub fn from_parts(next_id: UserId, users: Vec<User>) -> Self {
        let mut unique: Vec<User> = Vec::with_capacity(users.len());
        for user in users {
            if unique.iter().all(|kept| kept.id() != user.id()) {
                unique.push(user);
            }
        }
        let floor = unique
            .iter()
            .map(User::id)
            .max()
            .map_or(UserId::FIRST, UserId::next);
        Self {
            next_id: next_id.max(floor),
            users: unique,
        }
    }

    /// Records in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Identifier the next created record receives.
    pub fn next_id(&self) -> UserId {
        self.next_id
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Append a record built from `fields` and return it.
    pub fn insert(&mut self, fields: UserFields) -> User {
        let user = User::new(self.next_id, fields);
        self.next_id = self.next_id.next();
        self.users.push(user.clone());
        user
    }

    /// Overlay `patch` onto the record with `id`, in place.
    ///
    /// Returns the updated record, or `None` when no record matches.
    pub fn update(&mut self, id: UserId, patch: UserFields) -> Option<User> {
        let user = self.users.iter_mut().find(|user| user.id() == id)?;
        user.apply(patch);
        Some(user.clone())
    }

    /// Remove the record with `id`, reporting whether one existed.
    pub fn remove(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.id() != id);
        self.users.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn fields(first: &str, last: &str) -> UserFields {
        UserFields::new(first, last, "9876543210", format!("{first}@x.com"))
    }

    #[fixture]
    fn populated() -> UserCollection {
        let mut collection = UserCollection::new();
        collection.insert(fields("Alice", "Smith"));
        collection.insert(fields("Bob", "Jones"));
        collection.insert(fields("Carol", "White"));
        collection
    }

    #[rstest]
    fn insert_assigns_sequential_ids_from_one() {
        let mut collection = UserCollection::new();
        let first = collection.insert(fields("Alice", "Smith"));
        let second = collection.insert(fields("Bob", "Jones"));

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
        assert_eq!(collection.next_id(), UserId::new(3));
    }

    #[rstest]
    fn update_replaces_in_place(mut populated: UserCollection) {
        let updated = populated
            .update(
                UserId::new(2),
                UserFields::default().with(crate::domain::LAST_NAME, "Brown"),
            )
            .expect("record exists");

        assert_eq!(updated.fields().first_name(), Some("Bob"));
        assert_eq!(updated.fields().last_name(), Some("Brown"));
        let ids: Vec<u64> = populated.users().iter().map(|u| u.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(populated.users().get(1), Some(&updated));
    }

    #[rstest]
    fn update_of_unknown_id_is_a_no_op(mut populated: UserCollection) {
        let before = populated.clone();
        let result = populated.update(UserId::new(99), fields("Zed", "Zulu"));

        assert!(result.is_none());
        assert_eq!(populated, before);
    }

    #[rstest]
    fn remove_targets_only_matching_id(mut populated: UserCollection) {
        let survivors: Vec<User> = populated
            .users()
            .iter()
            .filter(|u| u.id() != UserId::new(2))
            .cloned()
            .collect();

        assert!(populated.remove(UserId::new(2)));
        assert_eq!(populated.users(), survivors.as_slice());
    }

    #[rstest]
    fn remove_of_unknown_id_reports_false(mut populated: UserCollection) {
        let before = populated.clone();
        assert!(!populated.remove(UserId::new(42)));
        assert_eq!(populated, before);
    }

    #[rstest]
    fn ids_are_not_reused_after_removal(mut populated: UserCollection) {
        populated.remove(UserId::new(3));
        let created = populated.insert(fields("Dan", "Green"));
        assert_eq!(created.id(), UserId::new(4));
    }

    #[rstest]
    fn from_parts_raises_next_id_and_drops_duplicates() {
        let users = vec![
            User::new(UserId::new(5), fields("Alice", "Smith")),
            User::new(UserId::new(5), fields("Bob", "Jones")),
            User::new(UserId::new(2), fields("Carol", "White")),
        ];
        let collection = UserCollection::from_parts(UserId::FIRST, users);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.next_id(), UserId::new(6));
        assert_eq!(
            collection.users().first().and_then(|u| u.fields().first_name()),
            Some("Alice")
        );
    }

    #[rstest]
    fn from_parts_keeps_larger_stored_next_id() {
        let users = vec![User::new(UserId::new(2), fields("Alice", "Smith"))];
        let collection = UserCollection::from_parts(UserId::new(10), users);
        assert_eq!(collection.next_id(), UserId::new(10));
    }
}
