//! Public view of a user's account

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Profile returned to the account owner; never carries OTP fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
        }
    }
}
