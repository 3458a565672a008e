//! Field checks mirroring the roster form rules.
//!
//! Generated records must pass the client validator unchanged, so the
//! constraints here track the client's user field schema.
//!
//! # Validation Rules
//!
//! - Names: 2 to 50 characters, ASCII letters and spaces, not whitespace-only
//! - Phone numbers: exactly ten ASCII digits, the first of which is 6-9
//! - Email addresses: at most 100 characters

/// Minimum allowed length for a first or last name.
pub const NAME_MIN: usize = 2;

/// Maximum allowed length for a first or last name.
pub const NAME_MAX: usize = 50;

/// Number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Maximum allowed length for an email address.
pub const EMAIL_MAX: usize = 100;

/// Validates a first or last name against the form constraints.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_person_name;
///
/// assert!(is_valid_person_name("Ada"));
/// assert!(is_valid_person_name("Mary Ann"));
/// assert!(!is_valid_person_name("A"));          // Too short
/// assert!(!is_valid_person_name("O'Brien"));    // Invalid character
/// assert!(!is_valid_person_name("   "));        // Whitespace-only
/// ```
#[must_use]
pub fn is_valid_person_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&length) {
        return false;
    }
    if name.trim().is_empty() {
        return false;
    }
    name.chars().all(is_valid_name_char)
}

/// Validates a phone number: ten digits, leading digit 6-9.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_phone_number;
///
/// assert!(is_valid_phone_number("9876543210"));
/// assert!(!is_valid_phone_number("5876543210"));
/// assert!(!is_valid_phone_number("987654321"));
/// ```
#[must_use]
pub fn is_valid_phone_number(phone: &str) -> bool {
    let mut chars = phone.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    matches!(first, '6'..='9')
        && phone.chars().count() == PHONE_DIGITS
        && chars.all(|c| c.is_ascii_digit())
}

const fn is_valid_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' '
}

/// Drops every character that a person name may not contain.
#[must_use]
pub(crate) fn sanitize_person_name(name: &str) -> String {
    name.chars().filter(|c| is_valid_name_char(*c)).collect()
}
