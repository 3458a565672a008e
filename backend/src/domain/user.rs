//! User record model.
//!
//! A record is a server-assigned [`UserId`] plus the JSON object a client
//! sent for it. Format rules for names, phone numbers, and email addresses
//! are enforced by the client form, not here.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned record identifier.
///
/// Identifiers start at 1 and increase by one per created record. They are
/// never reassigned or reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Identifier assigned to the first record in an empty collection.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one.
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Wire name of the given-name field.
pub const FIRST_NAME: &str = "firstName";
/// Wire name of the family-name field.
pub const LAST_NAME: &str = "lastName";
/// Wire name of the phone-number field.
pub const PHONE_NUMBER: &str = "phoneNumber";
/// Wire name of the email-address field.
pub const EMAIL_ADDRESS: &str = "emailAddress";

const ID_KEY: &str = "id";

/// Client-supplied fields of a record.
///
/// The service keeps whatever JSON object a client sends, including keys and
/// value types it does not know about. Only two keys are filtered on the way
/// in: `id`, which only the server assigns, and any key whose value is
/// `null`, which counts as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct UserFields(Map<String, Value>);

impl UserFields {
    /// Build the four contact fields as strings.
    ///
    /// # Examples
    /// ```
    /// use roster_backend::domain::UserFields;
    ///
    /// let fields = UserFields::new("Ada", "Lovelace", "9876543210", "ada@example.com");
    /// assert_eq!(fields.first_name(), Some("Ada"));
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self::default()
            .with(FIRST_NAME, first_name.into())
            .with(LAST_NAME, last_name.into())
            .with(PHONE_NUMBER, phone_number.into())
            .with(EMAIL_ADDRESS, email_address.into())
    }

    /// Return `self` with `key` set to `value`.
    ///
    /// `id` and `null` values are ignored, as they are when decoding.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    fn insert(&mut self, key: String, value: Value) {
        if key != ID_KEY && !value.is_null() {
            self.0.insert(key, value);
        }
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value under `key` when it is a JSON string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Given name, when stored as a string.
    pub fn first_name(&self) -> Option<&str> {
        self.text(FIRST_NAME)
    }

    /// Family name, when stored as a string.
    pub fn last_name(&self) -> Option<&str> {
        self.text(LAST_NAME)
    }

    /// Phone number, when stored as a string.
    pub fn phone_number(&self) -> Option<&str> {
        self.text(PHONE_NUMBER)
    }

    /// Email address, when stored as a string.
    pub fn email_address(&self) -> Option<&str> {
        self.text(EMAIL_ADDRESS)
    }

    /// Shallow-merge `patch` over `self`.
    ///
    /// Keys present in the patch replace the current value whatever its
    /// type; keys absent from it are kept.
    ///
    /// # Examples
    /// ```
    /// use roster_backend::domain::UserFields;
    ///
    /// let mut fields = UserFields::new("Ada", "Lovelace", "9876543210", "ada@example.com");
    /// fields.overlay(UserFields::default().with("lastName", "Byron"));
    /// assert_eq!(fields.first_name(), Some("Ada"));
    /// assert_eq!(fields.last_name(), Some("Byron"));
    /// ```
    pub fn overlay(&mut self, patch: UserFields) {
        self.0.extend(patch.0);
    }

    /// Whether no key is supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for UserFields {
    fn from(map: Map<String, Value>) -> Self {
        let mut fields = Self::default();
        for (key, value) in map {
            fields.insert(key, value);
        }
        fields
    }
}

impl From<UserFields> for Map<String, Value> {
    fn from(fields: UserFields) -> Self {
        fields.0
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` is unique within a collection and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(flatten)]
    fields: UserFields,
}

impl User {
    /// Assemble a record from an identifier and its fields.
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self { id, fields }
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Contact fields.
    pub fn fields(&self) -> &UserFields {
        &self.fields
    }

    /// Overlay `patch` onto the record's fields, keeping the identifier.
    pub fn apply(&mut self, patch: UserFields) {
        self.fields.overlay(patch);
    }
}

#[cfg(test)]
mod tests;
