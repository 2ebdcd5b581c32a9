use actix_web::{web, HttpResponse};

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::handle_domain_error;

use lf_core::repositories::UserRepository;
use lf_core::services::notifier::NotifierTrait;
use lf_shared::MessageResponse;

use super::AuthState;

/// Handler for POST /api/auth/register
///
/// # Request Body
///
/// ```json
/// { "name": "Jane", "email": "jane@example.com", "phoneNumber": "555-0100" }
/// ```
///
/// # Response
///
/// - 201 Created: `{ "message": "User registered successfully. You can now log in." }`
/// - 400 Bad Request: blank or malformed field, or the email is taken
pub async fn register<U, N>(
    state: web::Data<AuthState<U, N>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
{
    let request = match request.into_inner().normalized() {
        Ok(request) => request,
        Err(e) => return handle_domain_error(e.into()),
    };

    match state
        .auth_service
        .register(&request.name, &request.email, &request.phone_number)
        .await
    {
        Ok(_) => HttpResponse::Created().json(MessageResponse::new(
            "User registered successfully. You can now log in.",
        )),
        Err(error) => handle_domain_error(error),
    }
}
