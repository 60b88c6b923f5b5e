use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User model - core identity entity
///
/// This is also the shape persisted to the durable key-value slot, so field
/// names are part of the storage contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub is_streaming: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Fresh account with zeroed counters, created at registration time.
    pub fn new(username: String, email: String, avatar_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            avatar_url,
            bio: None,
            followers: 0,
            following: 0,
            is_streaming: false,
            created_at: Utc::now(),
        }
    }
}

/// User registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = crate::validators::validate_username_shape_validator))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}
