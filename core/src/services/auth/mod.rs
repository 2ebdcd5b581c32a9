//! Authentication service module
//!
//! Passwordless email login:
//! - Registration of name, email and phone number
//! - One-time code issuance by email with a pending-verification token
//! - Code verification yielding a session token
//! - Session status and profile lookup

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
