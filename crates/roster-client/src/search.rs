//! Case-insensitive client-side search over fetched records.

use crate::record::{FieldName, UserRecord};

/// Fields a search query is matched against.
const SEARCHED_FIELDS: [FieldName; 4] = [
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::EmailAddress,
    FieldName::PhoneNumber,
];

/// Whether `record` matches `query`.
///
/// A record matches when the lower-cased query is a substring of any of its
/// lower-cased name, email, or phone fields. An empty query matches every
/// record.
#[must_use]
pub fn matches(record: &UserRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    needle.is_empty()
        || SEARCHED_FIELDS
            .iter()
            .filter_map(|field| record.field(*field))
            .any(|value| value.to_lowercase().contains(&needle))
}

/// Records matching `query`, in collection order.
///
/// # Examples
/// ```
/// use roster_client::{UserRecord, filter_users};
///
/// let users = vec![UserRecord {
///     id: 1,
///     first_name: Some("Alice".to_owned()),
///     ..UserRecord::default()
/// }];
/// assert_eq!(filter_users(&users, "ALI").len(), 1);
/// assert!(filter_users(&users, "bob").is_empty());
/// ```
#[must_use]
pub fn filter_users<'a>(users: &'a [UserRecord], query: &str) -> Vec<&'a UserRecord> {
    users.iter().filter(|user| matches(user, query)).collect()
}
