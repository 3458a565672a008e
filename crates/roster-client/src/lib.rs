//! Client-side logic for the roster user API.
//!
//! The crate holds everything a front-end needs apart from rendering:
//!
//! - [`USER_FIELDS`]: the declarative form description shared by rendering
//!   and validation.
//! - [`validate`] and [`validate_field`]: schema-driven validation with the
//!   exact user-facing messages.
//! - [`UserForm`]: touched/blur/submit form state that calls back to reload
//!   the list after a successful save.
//! - [`UserListView`]: the fetched collection, client-side search, the
//!   delete confirmation, and the page-level error banner.
//! - [`HttpUsersClient`]: the reqwest adapter behind [`UsersGateway`].
//!
//! # Example
//!
//! ```
//! use roster_client::{FieldName, UserForm};
//!
//! let mut form = UserForm::create();
//! form.change(FieldName::PhoneNumber, "12345");
//! form.blur(FieldName::PhoneNumber);
//! assert_eq!(
//!     form.error(FieldName::PhoneNumber),
//!     Some("Enter a valid 10-digit Indian mobile number")
//! );
//! ```

mod api;
mod confirm;
mod form;
mod list;
mod record;
mod schema;
mod search;
mod table;
mod validation;

pub use api::{ClientError, HttpUsersClient, UsersGateway};
pub use confirm::DeleteConfirmation;
pub use form::{FormMode, SubmitOutcome, UserForm};
pub use list::{DeleteOutcome, LOAD_FAILED_MESSAGE, UserListView};
pub use record::{FieldName, UserInput, UserRecord};
pub use schema::{
    Check, FieldDescriptor, InputKind, Normalise, Pattern, Rule, TEL_MAX_DIGITS, USER_FIELDS,
    descriptor,
};
pub use search::{filter_users, matches};
pub use table::write_table;
pub use validation::{FormValues, ValidationErrors, validate, validate_field};
