//! Domain primitives, services, and ports.
//!
//! Purpose: define the user record types and the collection semantics that
//! inbound and outbound adapters share. Nothing here knows about HTTP or
//! storage formats beyond serde.
//!
//! Public surface:
//! - Error, ErrorCode: transport-neutral error payload.
//! - TraceId: request-scoped correlation identifier.
//! - User, UserFields, UserId: the record model.
//! - UserCollection: ordered collection with id assignment.
//! - UserDirectoryService: implements the driving ports over a repository.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_collection;
pub mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EMAIL_ADDRESS, FIRST_NAME, LAST_NAME, PHONE_NUMBER, User, UserFields, UserId};
pub use self::user_collection::UserCollection;
pub use self::users_service::UserDirectoryService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use roster_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("no such route"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
