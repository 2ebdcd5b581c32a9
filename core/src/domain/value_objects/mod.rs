//! Value objects representing immutable domain concepts.

pub mod user_profile;

// Re-export commonly used types
pub use user_profile::UserProfile;
