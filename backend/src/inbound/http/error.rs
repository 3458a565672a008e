//! Rendering of domain errors as HTTP responses.
//!
//! Handlers return [`Error`] directly. Client errors are sent as-is; internal
//! errors are logged in full and replaced by a generic message that keeps
//! only the trace id.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The payload a client is allowed to see for `error`.
fn client_view(error: &Error) -> Error {
    match (error.code(), error.trace_id()) {
        (ErrorCode::InternalError, Some(trace_id)) => {
            Error::internal(REDACTED_MESSAGE).with_trace_id(trace_id.to_owned())
        }
        (ErrorCode::InternalError, None) => Error::internal(REDACTED_MESSAGE),
        _ => error.clone(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(
                message = self.message(),
                trace_id = self.trace_id(),
                details = ?self.details(),
                "request failed with internal error"
            );
        }
        let mut response = HttpResponse::build(self.status_code());
        if let Some(trace_id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, trace_id.to_owned()));
        }
        response.json(client_view(self))
    }
}
