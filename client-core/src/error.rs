use uuid::Uuid;

pub type Result<T> = std::result::Result<T, AppError>;

/// Unified error type for the client core.
///
/// Every service operation fails with one of these; display strings are the
/// user-facing messages shown by the presentation layer. Nothing here is
/// fatal - all failures are per-operation and recoverable by retrying.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Username already taken")]
    UsernameAlreadyTaken,

    #[error("Stream not found: {0}")]
    StreamNotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No active stream")]
    NoActiveStream,

    #[error("You already have a live stream")]
    AlreadyLive,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code for the alert/notification channel.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::EmailAlreadyExists => "email_exists",
            Self::UsernameAlreadyTaken => "username_taken",
            Self::StreamNotFound(_) => "stream_not_found",
            Self::Validation(_) => "validation_error",
            Self::NoActiveStream => "no_active_stream",
            Self::AlreadyLive => "already_live",
            Self::Storage(_) => "storage_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<kv_store::KvError> for AppError {
    fn from(err: kv_store::KvError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

use thiserror::Error;
