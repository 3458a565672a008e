//! Generated user seed types.
//!
//! These types carry no identifier: the collection service assigns ids when
//! the records are inserted.

use serde::{Deserialize, Serialize};

/// A generated example user record.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
///
/// let user = ExampleUserSeed {
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     phone_number: "9876543210".to_owned(),
///     email_address: "ada.lovelace@example.com".to_owned(),
/// };
///
/// assert_eq!(user.first_name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Given name; letters and spaces only.
    pub first_name: String,
    /// Family name; letters and spaces only.
    pub last_name: String,
    /// Ten digit mobile number starting with 6-9.
    pub phone_number: String,
    /// Lower-cased email address.
    pub email_address: String,
}
