use actix_web::{web, HttpResponse};

use lf_core::repositories::UserRepository;
use lf_core::services::notifier::NotifierTrait;
use lf_shared::MessageResponse;

use super::AuthState;

/// Handler for POST /api/auth/logout
///
/// Clears the session cookie. Tokens are not revoked server-side, so this
/// always succeeds.
pub async fn logout<U, N>(state: web::Data<AuthState<U, N>>) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
{
    HttpResponse::Ok()
        .cookie(state.cookies.clear_session())
        .json(MessageResponse::new("Logged out successfully."))
}
