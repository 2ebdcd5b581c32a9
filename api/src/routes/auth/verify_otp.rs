use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::VerifyOtpRequest;
use crate::handlers::error::handle_domain_error;

use lf_core::repositories::UserRepository;
use lf_core::services::notifier::NotifierTrait;
use lf_shared::MessageResponse;

use super::AuthState;

/// Handler for POST /api/auth/verify-otp
///
/// Exchanges the pending cookie plus the emailed code for a session.
///
/// - 200 OK: clears `temp-token`, sets `token`
/// - 400 Bad Request: wrong, expired or already used code
/// - 401 Unauthorized: no pending cookie, or it expired
///
/// The cookie is checked before the body, so a missing cookie is a 401 even
/// when the body is absent or not JSON.
pub async fn verify_otp<U, N>(
    req: HttpRequest,
    state: web::Data<AuthState<U, N>>,
    request: Option<web::Json<VerifyOtpRequest>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
{
    let pending = req.cookie(state.cookies.pending_name());
    let pending_token = pending.as_ref().map(|c| c.value());
    let otp = request.as_ref().map(|r| r.otp.trim()).unwrap_or_default();

    match state.auth_service.verify_otp(pending_token, otp).await
    {
        Ok(session_token) => HttpResponse::Ok()
            .cookie(state.cookies.clear_pending())
            .cookie(state.cookies.session(session_token))
            .json(MessageResponse::new("Verification successful.")),
        Err(error) => handle_domain_error(error),
    }
}
