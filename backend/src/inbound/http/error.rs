//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while giving every failure the
//! same `{"error": message}` body. Server-side causes are logged here and
//! never leak to the client.

use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidInput | ErrorCode::DuplicateIdentity | ErrorCode::InvalidCredentials => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::OrderPlacementFailed | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message rendered to the client. Server faults keep the underlying cause
/// out of the body; it is logged instead.
fn client_message(err: &Error) -> &str {
    match err.code() {
        ErrorCode::OrderPlacementFailed => "Order placement failed",
        ErrorCode::Internal => "Internal server error",
        _ => err.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!(code = ?self.code(), message = %self.message(), "request failed");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": client_message(self) }))
    }
}

/// Render malformed JSON bodies with the same `{"error": message}` shape the
/// rest of the API uses.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let body = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    actix_web::error::InternalError::from_response(err, body).into()
}
