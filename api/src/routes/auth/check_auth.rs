use actix_web::{web, HttpRequest, HttpResponse};

use crate::handlers::error::handle_domain_error;

use lf_core::repositories::UserRepository;
use lf_core::services::notifier::NotifierTrait;
use lf_shared::MessageResponse;

use super::AuthState;

/// Handler for GET /api/auth/check-auth
///
/// Reports whether the session cookie holds a valid token.
pub async fn check_auth<U, N>(req: HttpRequest, state: web::Data<AuthState<U, N>>) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
{
    let session = req.cookie(state.cookies.session_name());

    match state
        .auth_service
        .check_status(session.as_ref().map(|c| c.value()))
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("User is authenticated.")),
        Err(error) => handle_domain_error(error),
    }
}
