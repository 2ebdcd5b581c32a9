//! Session authentication middleware for protected endpoints.
//!
//! The middleware reads the session token from its cookie (falling back to
//! an `Authorization: Bearer` header), resolves it through the core
//! `AccessGuard` and injects the caller's identity into the request.
//! Requests without a valid token are answered with 401 before the wrapped
//! handler runs.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use lf_core::services::guard::{AccessGuard, Identity};
use std::{
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
    task::{Context, Poll},
};

use crate::handlers::error::handle_domain_error;

/// Authenticated caller, available to handlers behind `CookieAuth`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub Identity);

impl Deref for AuthenticatedUser {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Identity>()
            .copied()
            .map(AuthenticatedUser)
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

/// Session authentication middleware factory
#[derive(Clone)]
pub struct CookieAuth {
    guard: AccessGuard,
    cookie_name: String,
}

impl CookieAuth {
    /// Creates the middleware reading the token from `cookie_name`
    pub fn new(guard: AccessGuard, cookie_name: impl Into<String>) -> Self {
        Self {
            guard,
            cookie_name: cookie_name.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CookieAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CookieAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CookieAuthMiddleware {
            service: Rc::new(service),
            guard: self.guard.clone(),
            cookie_name: Rc::from(self.cookie_name.as_str()),
        }))
    }
}

/// Session authentication middleware service
pub struct CookieAuthMiddleware<S> {
    service: Rc<S>,
    guard: AccessGuard,
    cookie_name: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for CookieAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token = extract_token(&req, &self.cookie_name);

        match self.guard.authenticate(token.as_deref()) {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                Box::pin(async move {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                })
            }
            Err(error) => {
                tracing::debug!(path = %req.path(), error = %error, "Rejected unauthenticated request");
                let response = handle_domain_error(error);
                Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) })
            }
        }
    }
}

/// Session token from the cookie, else from the bearer header
fn extract_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    req.cookie(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| extract_bearer_token(req))
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
