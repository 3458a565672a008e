//! Error types for the example-data crate.

use thiserror::Error;

/// Errors that can occur during user generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid person name after maximum retries.
    #[error("failed to generate valid {part} name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Which part of the name was being generated.
        part: &'static str,
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// A generated email address exceeded the permitted length.
    #[error("generated email address exceeds {max} characters: {email}")]
    EmailTooLong {
        /// The offending address.
        email: String,
        /// Maximum permitted length.
        max: usize,
    },
}
