//! CORS middleware configuration for the browser client.
//!
//! Only configured origins may make credentialed requests; any other origin
//! is answered with 400 before the handler runs. Requests without an `Origin`
//! header (curl, server-to-server) are not subject to CORS.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use lf_shared::CorsConfig;

/// Creates a CORS middleware instance from the configured origins
pub fn create_cors(config: &CorsConfig) -> Cors {
    tracing::info!(origins = ?config.allowed_origins, "Configuring CORS");

    let allowed = config.clone();
    let mut cors = Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .map(|o| allowed.is_origin_allowed(o))
                .unwrap_or(false)
        })
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age)
        .block_on_origin_mismatch(true);

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_local_client_is_allowed_with_credentials() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::default()))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn test_requests_without_origin_pass() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::default()))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unknown_origin_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::default()))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
