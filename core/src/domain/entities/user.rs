//! User entity representing a registered account in the Lost & Found system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Smallest one-time code that can be issued
pub const OTP_MIN: u32 = 100_000;

/// Largest one-time code that can be issued
pub const OTP_MAX: u32 = 999_999;

/// A one-time login code together with its expiry
///
/// Code and expiry always travel together: a user either has both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCode {
    /// Six decimal digits
    pub code: String,

    /// Instant after which the code is rejected
    pub expires_at: DateTime<Utc>,
}

impl OneTimeCode {
    pub fn new(code: String, expires_at: DateTime<Utc>) -> Self {
        Self { code, expires_at }
    }

    /// Checks if the code has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Rebuild from two nullable storage columns.
    ///
    /// A row with only one of the two set is treated as having no code.
    pub fn from_columns(code: Option<String>, expires_at: Option<DateTime<Utc>>) -> Option<Self> {
        match (code, expires_at) {
            (Some(code), Some(expires_at)) => Some(Self { code, expires_at }),
            _ => None,
        }
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Unique email address, compared exactly as stored
    pub email: String,

    /// Contact phone number
    pub phone_number: String,

    /// Set once the user has completed an OTP login
    pub is_verified: bool,

    /// Outstanding one-time code, if a login is in progress
    #[serde(skip_serializing)]
    pub otp: Option<OneTimeCode>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unverified user
    pub fn new(name: String, email: String, phone_number: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone_number,
            is_verified: false,
            otp: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stores a fresh one-time code, replacing any previous one
    pub fn set_otp(&mut self, code: String, expires_at: DateTime<Utc>) {
        self.otp = Some(OneTimeCode::new(code, expires_at));
        self.updated_at = Utc::now();
    }

    /// Clears the one-time code and marks the user as verified
    pub fn verify(&mut self) {
        self.otp = None;
        self.is_verified = true;
        self.updated_at = Utc::now();
    }
}
