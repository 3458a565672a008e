//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa`; these wrappers mirror their wire shape
//! and are registered under the domain type paths.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed JSON, a non-object body, or a non-numeric identifier.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No route matches the request.
    #[schema(rename = "not_found")]
    NotFound,
    /// Unexpected server failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "id must be a non-negative integer")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::UserFields`].
///
/// Used for create and update bodies. Any JSON object is accepted and
/// stored as sent, including keys not listed here. `id` and `null` values
/// are dropped.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserFields, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserFieldsSchema {
    /// Given name.
    #[schema(example = "Ada")]
    first_name: Option<String>,
    /// Family name.
    #[schema(example = "Lovelace")]
    last_name: Option<String>,
    /// Ten digit phone number.
    #[schema(example = "9876543210")]
    phone_number: Option<String>,
    /// Email address.
    #[schema(example = "ada@example.com")]
    email_address: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Server-assigned identifier.
    #[schema(example = 1)]
    id: u64,
    /// Given name.
    #[schema(example = "Ada")]
    first_name: Option<String>,
    /// Family name.
    #[schema(example = "Lovelace")]
    last_name: Option<String>,
    /// Ten digit phone number.
    #[schema(example = "9876543210")]
    phone_number: Option<String>,
    /// Email address.
    #[schema(example = "ada@example.com")]
    email_address: Option<String>,
}
