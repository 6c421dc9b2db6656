//! User model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Library member, persisted as one flat JSON object.
///
/// `user_id` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub user_id: String,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User: {}, ID: {}", self.name, self.user_id)
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "User ID cannot be empty"))]
    pub user_id: String,
}

/// Update user request. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub user_id: Option<String>,
}
