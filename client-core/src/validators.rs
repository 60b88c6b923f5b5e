use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Input validation utilities for the client core

// Compile regex patterns once at startup
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // This regex is hardcoded and validated - it is a compile-time constant in practice
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid - fix source code")
});

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    // This regex is hardcoded and validated - it is a compile-time constant in practice
    Regex::new(r"^[a-zA-Z0-9_-]{3,20}$")
        .expect("hardcoded username regex is invalid - fix source code")
});

/// The fixed set of tags a stream may carry.
pub const STREAM_TAGS: &[&str] = &[
    "Beginner Friendly",
    "English",
    "Competitive",
    "Casual",
    "Educational",
    "Family Friendly",
    "Professional",
    "Entertainment",
    "Creative",
    "Music",
    "Gaming",
    "Technology",
    "Talk Show",
    "AMA",
];

/// Validate email format (RFC 5322 simplified)
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Validate username format (3-20 characters, alphanumeric with - and _)
pub fn validate_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

/// Check membership in the fixed tag set
pub fn validate_tag(tag: &str) -> bool {
    STREAM_TAGS.contains(&tag)
}

/// validator crate compatible custom validator for username shape
pub fn validate_username_shape_validator(username: &str) -> Result<(), ValidationError> {
    if validate_username(username) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_username"))
    }
}

/// validator crate compatible custom validator for a tag list
pub fn validate_tags_validator(tags: &Vec<String>) -> Result<(), ValidationError> {
    if tags.iter().all(|tag| validate_tag(tag)) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_tag"))
    }
}
