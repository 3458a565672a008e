//! Declarative description of the user form.
//!
//! [`USER_FIELDS`] is the single source for both form rendering and
//! validation. Each descriptor lists its rules in evaluation order; the first
//! failing rule supplies the field's error message.

use crate::record::FieldName;

/// HTML-style input kind used when rendering a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text.
    Text,
    /// Telephone number.
    Tel,
    /// Email address.
    Email,
}

/// Longest value a telephone input accepts.
pub const TEL_MAX_DIGITS: usize = 10;

impl InputKind {
    /// Filter keystrokes the way the rendered input would.
    ///
    /// Telephone inputs keep only ASCII digits, capped at
    /// [`TEL_MAX_DIGITS`]. Other kinds pass input through unchanged.
    #[must_use]
    pub fn mask(self, raw: &str) -> String {
        match self {
            Self::Tel => raw
                .chars()
                .filter(char::is_ascii_digit)
                .take(TEL_MAX_DIGITS)
                .collect(),
            Self::Text | Self::Email => raw.to_owned(),
        }
    }
}

/// How raw input is cleaned before the rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalise {
    /// Strip surrounding whitespace.
    Trim,
    /// Strip surrounding whitespace and lower-case.
    TrimLowercase,
}

impl Normalise {
    /// Apply the normalisation to `raw`.
    #[must_use]
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Trim => raw.trim().to_owned(),
            Self::TrimLowercase => raw.trim().to_lowercase(),
        }
    }
}

/// Named regular-expression checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `^[A-Za-z\s]+$`
    Letters,
    /// `^[6-9]\d{9}$`
    IndianMobile,
    /// Email address syntax.
    Email,
}

/// A single check applied to a normalised value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The value must not be empty.
    Required,
    /// At least this many characters.
    MinChars(usize),
    /// At most this many characters.
    MaxChars(usize),
    /// The value must match the pattern.
    Matches(Pattern),
}

/// A check plus the message reported when it fails.
///
/// `{label}` in the message is replaced by the field label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Check to run.
    pub check: Check,
    /// Message template.
    pub message: &'static str,
}

impl Rule {
    /// Render the failure message for a field labelled `label`.
    #[must_use]
    pub fn message_for(&self, label: &str) -> String {
        self.message.replace("{label}", label)
    }
}

/// One form field: identity, presentation, and ordered rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Wire name.
    pub name: FieldName,
    /// Human readable label.
    pub label: &'static str,
    /// Input kind.
    pub kind: InputKind,
    /// Whether the field must be filled in.
    pub required: bool,
    /// Normalisation applied before the rules.
    pub normalise: Normalise,
    /// Rules in evaluation order.
    pub rules: &'static [Rule],
}

const NAME_RULES: &[Rule] = &[
    Rule {
        check: Check::Required,
        message: "{label} is required",
    },
    Rule {
        check: Check::MinChars(2),
        message: "{label} must be at least 2 characters",
    },
    Rule {
        check: Check::MaxChars(50),
        message: "{label} must be less than 50 characters",
    },
    Rule {
        check: Check::Matches(Pattern::Letters),
        message: "{label} can only contain letters",
    },
];

const PHONE_RULES: &[Rule] = &[
    Rule {
        check: Check::Required,
        message: "{label} is required",
    },
    Rule {
        check: Check::Matches(Pattern::IndianMobile),
        message: "Enter a valid 10-digit Indian mobile number",
    },
];

const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: Check::Required,
        message: "{label} is required",
    },
    Rule {
        check: Check::Matches(Pattern::Email),
        message: "Enter a valid email address",
    },
    Rule {
        check: Check::MaxChars(100),
        message: "Email is too long",
    },
];

/// The user form, in display order.
pub const USER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: FieldName::FirstName,
        label: "First Name",
        kind: InputKind::Text,
        required: true,
        normalise: Normalise::Trim,
        rules: NAME_RULES,
    },
    FieldDescriptor {
        name: FieldName::LastName,
        label: "Last Name",
        kind: InputKind::Text,
        required: true,
        normalise: Normalise::Trim,
        rules: NAME_RULES,
    },
    FieldDescriptor {
        name: FieldName::PhoneNumber,
        label: "Phone Number",
        kind: InputKind::Tel,
        required: true,
        normalise: Normalise::Trim,
        rules: PHONE_RULES,
    },
    FieldDescriptor {
        name: FieldName::EmailAddress,
        label: "Email Address",
        kind: InputKind::Email,
        required: true,
        normalise: Normalise::TrimLowercase,
        rules: EMAIL_RULES,
    },
];

/// Look up the descriptor for `name`.
///
/// # Examples
/// ```
/// use roster_client::{FieldName, descriptor};
///
/// let phone = descriptor(FieldName::PhoneNumber).expect("phone field is declared");
/// assert_eq!(phone.label, "Phone Number");
/// ```
#[must_use]
pub fn descriptor(name: FieldName) -> Option<&'static FieldDescriptor> {
    USER_FIELDS.iter().find(|field| field.name == name)
}
