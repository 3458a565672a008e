//! Schema-driven validation of user form values.
//!
//! Validation walks [`USER_FIELDS`]: each raw value is normalised, then the
//! field's rules run in order and the first failure becomes the field error.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::record::{FieldName, UserInput, UserRecord};
use crate::schema::{Check, FieldDescriptor, Pattern, USER_FIELDS};

static LETTERS_RE: OnceLock<Regex> = OnceLock::new();
static MOBILE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("form regex {pattern} failed to compile: {error}"))
    })
}

fn pattern_regex(pattern: Pattern) -> &'static Regex {
    match pattern {
        Pattern::Letters => compiled(&LETTERS_RE, r"^[A-Za-z\s]+$"),
        Pattern::IndianMobile => compiled(&MOBILE_RE, r"^[6-9][0-9]{9}$"),
        // WHATWG "valid email address" production.
        Pattern::Email => compiled(
            &EMAIL_RE,
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        ),
    }
}

fn passes(check: Check, value: &str) -> bool {
    match check {
        Check::Required => !value.is_empty(),
        Check::MinChars(min) => value.chars().count() >= min,
        Check::MaxChars(max) => value.chars().count() <= max,
        Check::Matches(pattern) => pattern_regex(pattern).is_match(value),
    }
}

/// Normalise `raw` for `field` and run its rules.
///
/// Returns the normalised value, or the message of the first failing rule.
///
/// # Errors
///
/// Returns the failure message when any rule rejects the value.
///
/// # Examples
/// ```
/// use roster_client::{FieldName, descriptor, validate_field};
///
/// let email = descriptor(FieldName::EmailAddress).expect("declared");
/// assert_eq!(validate_field(email, " A@B.com "), Ok("a@b.com".to_owned()));
/// assert_eq!(
///     validate_field(email, "ab.com"),
///     Err("Enter a valid email address".to_owned())
/// );
/// ```
pub fn validate_field(field: &FieldDescriptor, raw: &str) -> Result<String, String> {
    let value = field.normalise.apply(raw);
    match field.rules.iter().find(|rule| !passes(rule.check, &value)) {
        Some(rule) => Err(rule.message_for(field.label)),
        None => Ok(value),
    }
}

/// Raw, unvalidated form input keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<FieldName, String>,
}

impl FormValues {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an existing record; missing fields stay blank.
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        let mut values = Self::new();
        for field in FieldName::ALL {
            if let Some(value) = record.field(field) {
                values.set(field, value);
            }
        }
        values
    }

    /// Current raw value of `field`; blank when never set.
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Replace the raw value of `field`.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }
}

/// Per-field error messages from a failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields and messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    pub(crate) fn record(&mut self, field: FieldName, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(message) => {
                self.errors.insert(field, message);
            }
        }
    }
}

/// Validate every field of `values`.
///
/// # Errors
///
/// Returns every failing field with its first failing rule's message.
///
/// # Examples
/// ```
/// use roster_client::{FieldName, FormValues, validate};
///
/// let mut values = FormValues::new();
/// values.set(FieldName::FirstName, "John");
/// values.set(FieldName::LastName, "Smith");
/// values.set(FieldName::PhoneNumber, "9876543210");
/// values.set(FieldName::EmailAddress, "a@b.com");
/// assert!(validate(&values).is_ok());
/// ```
pub fn validate(values: &FormValues) -> Result<UserInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut cleaned = BTreeMap::new();
    for field in USER_FIELDS {
        match validate_field(field, values.get(field.name)) {
            Ok(value) => {
                cleaned.insert(field.name, value);
            }
            Err(message) => errors.record(field.name, Err(message)),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    let mut take = |field| cleaned.remove(&field).unwrap_or_default();
    Ok(UserInput {
        first_name: take(FieldName::FirstName),
        last_name: take(FieldName::LastName),
        phone_number: take(FieldName::PhoneNumber),
        email_address: take(FieldName::EmailAddress),
    })
}
