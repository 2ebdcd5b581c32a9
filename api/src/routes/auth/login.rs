use actix_web::{web, HttpResponse};

use crate::dto::auth::LoginRequest;
use crate::handlers::error::handle_domain_error;

use lf_core::repositories::UserRepository;
use lf_core::services::notifier::NotifierTrait;
use lf_shared::MessageResponse;

use super::AuthState;

/// Handler for POST /api/auth/login
///
/// Emails a one-time code and sets the pending-verification cookie.
///
/// - 200 OK: `{ "message": "OTP sent to your email." }`
/// - 404 Not Found: no user with this email
/// - 500: the code could not be stored or sent; no cookie is set
pub async fn login<U, N>(
    state: web::Data<AuthState<U, N>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
{
    match state.auth_service.login(request.email.trim()).await {
        Ok(pending_token) => HttpResponse::Ok()
            .cookie(state.cookies.pending(pending_token))
            .json(MessageResponse::new("OTP sent to your email.")),
        Err(error) => handle_domain_error(error),
    }
}
