//! Deterministic example user records for demonstration and testing.
//!
//! The crate produces believable, reproducible contact records that satisfy
//! the roster form rules: letter-only names, Indian mobile numbers, and
//! lower-cased email addresses. It is deliberately independent of the
//! backend domain types so both the server and the client can use it.
//!
//! # Example
//!
//! ```
//! use example_data::generate_example_users;
//!
//! let users = generate_example_users(42, 3).expect("generation succeeds");
//!
//! assert_eq!(users.len(), 3);
//! assert_eq!(users, generate_example_users(42, 3).expect("generation succeeds"));
//! ```

mod error;
mod generator;
mod seed;
mod validation;

pub use error::GenerationError;
pub use generator::generate_example_users;
pub use seed::ExampleUserSeed;
pub use validation::{
    EMAIL_MAX, NAME_MAX, NAME_MIN, PHONE_DIGITS, is_valid_person_name, is_valid_phone_number,
};
