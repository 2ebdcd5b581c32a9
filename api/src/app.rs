//! Application factory
//!
//! Wires the auth and item state into routes and middleware. Generic over
//! the repository, notifier and blob store so tests can run the full HTTP
//! surface against in-memory implementations.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use crate::handlers::error::json_error_handler;
use crate::middleware::{auth::CookieAuth, cors::create_cors};
use crate::routes::auth::{
    check_auth::check_auth, login::login, logout::logout, profile::profile, register::register,
    verify_otp::verify_otp, AuthState,
};
use crate::routes::items::{
    create::{create_found, create_lost},
    list::{list_items, my_items, recent_items},
    ItemState,
};

use lf_core::repositories::{ItemRepository, UserRepository};
use lf_core::services::blob::BlobStoreTrait;
use lf_core::services::notifier::NotifierTrait;
use lf_shared::types::HealthResponse;
use lf_shared::CorsConfig;

/// Create and configure the application with all dependencies
pub fn create_app<U, N, I, B>(
    auth_state: web::Data<AuthState<U, N>>,
    item_state: web::Data<ItemState<I, B>>,
    cors_config: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    N: NotifierTrait + 'static,
    I: ItemRepository + 'static,
    B: BlobStoreTrait + 'static,
{
    let cors = create_cors(cors_config);
    let session = CookieAuth::new(
        auth_state.guard.clone(),
        auth_state.cookies.session_name(),
    );
    let upload_dir = item_state.upload.dir.clone();
    let upload_prefix = item_state.upload.public_prefix.clone();

    App::new()
        .app_data(auth_state)
        .app_data(item_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // The last wrap runs first
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, N>))
                        .route("/login", web::post().to(login::<U, N>))
                        .route("/verify-otp", web::post().to(verify_otp::<U, N>))
                        .route("/check-auth", web::get().to(check_auth::<U, N>))
                        .route(
                            "/profile",
                            web::get().to(profile::<U, N>).wrap(session.clone()),
                        )
                        .route("/logout", web::post().to(logout::<U, N>)),
                )
                .service(
                    web::scope("/items")
                        .route("", web::get().to(list_items::<I, B>))
                        .route("/recent", web::get().to(recent_items::<I, B>))
                        .route(
                            "/my-items",
                            web::get().to(my_items::<I, B>).wrap(session.clone()),
                        )
                        .route(
                            "/lost",
                            web::post().to(create_lost::<I, B>).wrap(session.clone()),
                        )
                        .route(
                            "/found",
                            web::post().to(create_found::<I, B>).wrap(session),
                        ),
                ),
        )
        .service(actix_files::Files::new(&upload_prefix, upload_dir))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: String::from("healthy"),
        service: String::from("lost-found-api"),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(lf_shared::types::ErrorBody::new("Not found"))
}
