//! Wire types exchanged with the roster API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names of the editable user fields.
///
/// The declaration order is the form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    /// `firstName`
    FirstName,
    /// `lastName`
    LastName,
    /// `phoneNumber`
    PhoneNumber,
    /// `emailAddress`
    EmailAddress,
}

impl FieldName {
    /// Every field in form order.
    pub const ALL: [Self; 4] = [
        Self::FirstName,
        Self::LastName,
        Self::PhoneNumber,
        Self::EmailAddress,
    ];

    /// The camelCase key used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
            Self::EmailAddress => "emailAddress",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record as returned by the service.
///
/// Fields the service never received are absent from its JSON and decode as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: u64,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Ten digit mobile number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

impl UserRecord {
    /// Value of `field`, if the record carries one.
    #[must_use]
    pub fn field(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FirstName => self.first_name.as_deref(),
            FieldName::LastName => self.last_name.as_deref(),
            FieldName::PhoneNumber => self.phone_number.as_deref(),
            FieldName::EmailAddress => self.email_address.as_deref(),
        }
    }

    /// First and last name joined by a space, skipping missing parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Validated, normalised field values sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    /// Trimmed given name.
    pub first_name: String,
    /// Trimmed family name.
    pub last_name: String,
    /// Trimmed mobile number.
    pub phone_number: String,
    /// Trimmed, lower-cased email address.
    pub email_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_records_with_missing_fields() {
        let record: UserRecord =
            serde_json::from_str(r#"{"id":3,"firstName":"Ada"}"#).expect("decode record");
        assert_eq!(record.id, 3);
        assert_eq!(record.field(FieldName::FirstName), Some("Ada"));
        assert_eq!(record.field(FieldName::EmailAddress), None);
        assert_eq!(record.full_name(), "Ada");
    }

    #[rstest]
    fn input_serialises_camel_case_keys() {
        let input = UserInput {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            phone_number: "9876543210".to_owned(),
            email_address: "ada@example.com".to_owned(),
        };
        let value = serde_json::to_value(&input).expect("encode input");
        for field in FieldName::ALL {
            assert!(value.get(field.as_str()).is_some(), "missing {field}");
        }
    }
}
