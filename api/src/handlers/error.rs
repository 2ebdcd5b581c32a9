//! Mapping of domain errors to HTTP responses
//!
//! Auth failures answer with `{ "message": ... }`, input problems and
//! server failures with `{ "error": ... }`. Server failures never leak
//! their cause to the client.

use actix_web::{error::InternalError, error::JsonPayloadError, HttpRequest, HttpResponse};
use lf_core::errors::{AuthError, DomainError, TokenError, UnauthorizedReason};
use lf_shared::types::{ErrorBody, MessageResponse};

const SERVER_ERROR: &str = "Server error";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),

        DomainError::Token(TokenError::TokenGenerationFailed) => {
            tracing::error!("Token generation failed");
            server_error()
        }
        DomainError::Token(_) => HttpResponse::Unauthorized().json(MessageResponse::new(
            AuthError::Unauthorized(UnauthorizedReason::InvalidToken).to_string(),
        )),

        DomainError::Validation(e) => {
            tracing::debug!(error = %e, "Rejected request input");
            HttpResponse::BadRequest().json(ErrorBody::new(e.to_string()))
        }

        DomainError::NotFound { resource } => {
            tracing::debug!(%resource, "Resource not found");
            HttpResponse::NotFound().json(MessageResponse::new(AuthError::UserNotFound.to_string()))
        }

        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error");
            server_error()
        }
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    let message = MessageResponse::new(error.to_string());
    match error {
        AuthError::UserAlreadyExists | AuthError::InvalidOtp => {
            HttpResponse::BadRequest().json(message)
        }
        AuthError::UserNotFound => HttpResponse::NotFound().json(message),
        AuthError::Unauthorized(_) | AuthError::SessionExpired => {
            HttpResponse::Unauthorized().json(message)
        }
        AuthError::NotificationFailed => {
            tracing::error!("One-time code could not be delivered");
            server_error()
        }
    }
}

fn server_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody::new(SERVER_ERROR))
}

/// JSON body errors answer 400 `{ "error": ... }` instead of plain text
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorBody::new("Invalid request body."));
    InternalError::from_response(err, response).into()
}
