//! Request decoding helpers shared by the HTTP handlers.
//!
//! Every decoding failure becomes an `invalid_request` [`Error`] whose
//! `details` object names the offending field and a machine-readable code.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;

use crate::domain::{Error, UserId};

/// Machine-readable reasons attached to `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidId,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Name of a request field as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const ID_FIELD: FieldName = FieldName::new("id");
pub(crate) const BODY_FIELD: FieldName = FieldName::new("body");

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a non-negative integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidId.as_str(),
    }))
}

/// Parse a path segment into a [`UserId`].
pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    value
        .parse::<UserId>()
        .map_err(|_| invalid_id_error(field, value))
}

fn invalid_body_error(reason: impl std::fmt::Display) -> Error {
    let field = BODY_FIELD.as_str();
    Error::invalid_request(format!("request body must be a JSON object: {reason}"))
        .with_details(json!({
            "field": field,
            "code": ErrorCode::InvalidBody.as_str(),
        }))
}

/// `JsonConfig` error handler turning extractor failures into the standard
/// error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected request body");
    invalid_body_error(err).into()
}
