//! Token service module for JWT management
//!
//! Signs and verifies the two kinds of HS256 tokens used by the login flow:
//! short-lived pending-verification tokens and authenticated session tokens.
//! There is no revocation list; a token is valid until its embedded expiry.

mod service;


pub use service::TokenService;
