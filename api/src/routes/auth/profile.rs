use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthenticatedUser;

use lf_core::repositories::UserRepository;
use lf_core::services::notifier::NotifierTrait;

use super::AuthState;

/// Handler for GET /api/auth/profile
///
/// Requires the session middleware. Returns `{ name, email, phoneNumber }`.
pub async fn profile<U, N>(state: web::Data<AuthState<U, N>>, user: AuthenticatedUser) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
{
    match state.auth_service.get_profile(user.user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(error),
    }
}
