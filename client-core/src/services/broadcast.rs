//! Broadcast controller: the caller's own stream lifecycle.
//!
//! Holds at most one active broadcast. Writes go through the stream
//! repository, so the directory sees starts, updates, and ends immediately;
//! ended streams are archived there as historical records rather than
//! discarded.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::models::{CreateStreamRequest, Stream, UpdateStreamRequest, User};
use crate::repository::{StreamRepository, UserRepository};
use crate::validators::validate_tag;

use super::simulate_api_delay;

pub struct BroadcastService {
    streams: Arc<dyn StreamRepository>,
    users: Arc<dyn UserRepository>,
    settings: Settings,
    current: RwLock<Option<Stream>>,
}

impl BroadcastService {
    pub fn new(
        streams: Arc<dyn StreamRepository>,
        users: Arc<dyn UserRepository>,
        settings: Settings,
    ) -> Self {
        Self {
            streams,
            users,
            settings,
            current: RwLock::new(None),
        }
    }

    /// Go live. The new stream is inserted into the directory and the
    /// identity's streaming flag is raised.
    pub async fn start_stream(
        &self,
        streamer: &User,
        request: CreateStreamRequest,
    ) -> Result<Stream> {
        simulate_api_delay(self.settings.api.mock_delay()).await;

        self.validate_fields(
            Some(&request.title),
            request.description.as_deref(),
            request.tags.as_deref(),
        )?;

        // One live stream per identity, enforced against the whole directory
        // rather than just this controller instance.
        if self.streams.has_live_stream(streamer.id).await? {
            warn!(user_id = %streamer.id, "start rejected: streamer already live");
            return Err(AppError::AlreadyLive);
        }

        let mut streamer = streamer.clone();
        streamer.is_streaming = true;

        let stream = Stream {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            thumbnail_url: Some(self.settings.stream.default_thumbnail_url.clone()),
            streamer: streamer.clone(),
            viewer_count: 0,
            started_at: Utc::now(),
            ended_at: None,
            is_live: true,
            category: request.category,
            tags: request.tags,
        };

        self.streams.insert(stream.clone()).await?;
        self.users.set_streaming(streamer.id, true).await?;
        *self.current.write().await = Some(stream.clone());

        info!(stream_id = %stream.id, user_id = %streamer.id, title = %stream.title, "stream started");
        Ok(stream)
    }

    /// End the active broadcast. The record is archived in the directory
    /// (`is_live` cleared, `ended_at` stamped), not dropped.
    pub async fn end_stream(&self) -> Result<()> {
        simulate_api_delay(self.settings.api.mock_delay()).await;

        let mut current = self.current.write().await;
        let stream = current.as_ref().ok_or(AppError::NoActiveStream)?;

        if self.streams.mark_ended(stream.id).await?.is_none() {
            warn!(stream_id = %stream.id, "active stream missing from directory at end");
        }
        self.users.set_streaming(stream.streamer.id, false).await?;

        info!(stream_id = %stream.id, user_id = %stream.streamer.id, "stream ended");
        *current = None;
        Ok(())
    }

    /// Patch the active broadcast's metadata. Only the stream that is
    /// currently live through this controller can be updated.
    pub async fn update_stream_info(
        &self,
        stream_id: Uuid,
        request: UpdateStreamRequest,
    ) -> Result<Stream> {
        simulate_api_delay(self.settings.api.mock_delay()).await;

        if stream_id.is_nil() {
            return Err(AppError::Validation("Stream ID is required".to_string()));
        }

        let mut current = self.current.write().await;
        match current.as_ref() {
            Some(stream) if stream.id == stream_id => {}
            _ => return Err(AppError::NoActiveStream),
        }

        self.validate_fields(
            request.title.as_deref(),
            request.description.as_deref(),
            request.tags.as_deref(),
        )?;

        let updated = self
            .streams
            .update(stream_id, &request)
            .await?
            .ok_or(AppError::StreamNotFound(stream_id))?;

        info!(stream_id = %stream_id, "stream info updated");
        *current = Some(updated.clone());
        Ok(updated)
    }

    pub async fn current_stream(&self) -> Option<Stream> {
        self.current.read().await.clone()
    }

    /// Field-length and tag-set checks shared by start and update. `None`
    /// means the field was not provided and is skipped.
    fn validate_fields(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<()> {
        let limits = &self.settings.stream;

        if let Some(title) = title {
            if title.trim().is_empty() {
                return Err(AppError::Validation("Title is required".to_string()));
            }
            if title.chars().count() > limits.max_title_length {
                return Err(AppError::Validation(format!(
                    "Title must be less than {} characters",
                    limits.max_title_length
                )));
            }
        }

        if let Some(description) = description {
            if description.chars().count() > limits.max_description_length {
                return Err(AppError::Validation(format!(
                    "Description must be less than {} characters",
                    limits.max_description_length
                )));
            }
        }

        if let Some(tags) = tags {
            if let Some(unknown) = tags.iter().find(|tag| !validate_tag(tag)) {
                return Err(AppError::Validation(format!("Unknown tag: {}", unknown)));
            }
        }

        Ok(())
    }
}
