//! Stream models
//!
//! A stream holds a value copy of its streamer; the identity never references
//! back into the stream collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Stream category (for discovery/filtering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamCategory {
    Gaming,
    #[serde(rename = "chatting")]
    JustChatting,
    Music,
    Art,
    Sports,
    Education,
    Technology,
}

impl StreamCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::JustChatting => "chatting",
            Self::Music => "music",
            Self::Art => "art",
            Self::Sports => "sports",
            Self::Education => "education",
            Self::Technology => "technology",
        }
    }

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gaming => "Gaming",
            Self::JustChatting => "Just Chatting",
            Self::Music => "Music",
            Self::Art => "Art",
            Self::Sports => "Sports",
            Self::Education => "Education",
            Self::Technology => "Technology",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gaming" => Some(Self::Gaming),
            "chatting" | "just chatting" | "just_chatting" => Some(Self::JustChatting),
            "music" => Some(Self::Music),
            "art" => Some(Self::Art),
            "sports" => Some(Self::Sports),
            "education" => Some(Self::Education),
            "technology" => Some(Self::Technology),
            _ => None,
        }
    }
}

/// Stream record - a broadcast session, live or historical
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub streamer: User,
    pub viewer_count: u32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub is_live: bool,
    pub category: Option<StreamCategory>,
    pub tags: Option<Vec<String>>,
}

/// Request to start a new stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStreamRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<StreamCategory>,
    pub tags: Option<Vec<String>>,
}

/// Partial update for the active stream. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStreamRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<StreamCategory>,
    pub tags: Option<Vec<String>>,
    pub viewer_count: Option<u32>,
}

impl UpdateStreamRequest {
    /// Shallow merge of the provided fields into `stream`.
    pub fn apply_to(&self, stream: &mut Stream) {
        if let Some(title) = &self.title {
            stream.title = title.clone();
        }
        if let Some(description) = &self.description {
            stream.description = Some(description.clone());
        }
        if let Some(thumbnail_url) = &self.thumbnail_url {
            stream.thumbnail_url = Some(thumbnail_url.clone());
        }
        if let Some(category) = self.category {
            stream.category = Some(category);
        }
        if let Some(tags) = &self.tags {
            stream.tags = Some(tags.clone());
        }
        if let Some(viewer_count) = self.viewer_count {
            stream.viewer_count = viewer_count;
        }
    }
}
