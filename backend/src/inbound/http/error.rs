//! HTTP adapter mapping for domain and store errors.
//!
//! The domain [`Error`] stays HTTP-agnostic; this module gives it a status
//! code, a JSON body and a `trace-id` header, and decides how store
//! failures surface to clients.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::{debug, error};

use crate::domain::ports::UserStoreError;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

use super::validation::{invalid_body_error, user_validation_error};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned whenever a user id does not resolve.
pub const USER_NOT_FOUND: &str = "User not found";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        if matches!(self.code(), ErrorCode::InternalError) {
            builder.json(self.redacted())
        } else {
            builder.json(self)
        }
    }
}

impl From<UserStoreError> for Error {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::NotFound { id } => {
                debug!(user_id = %id, "user lookup missed");
                Error::not_found(USER_NOT_FOUND)
            }
            UserStoreError::Validation { reason } => user_validation_error(&reason),
            UserStoreError::Unavailable { message } => {
                error!(%message, "user store unavailable");
                Error::internal(message)
            }
        }
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    invalid_body_error(&err.to_string()).into()
}

/// JSON extractor configuration that reports malformed bodies with the
/// standard error payload instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
