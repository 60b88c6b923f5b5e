//! Stream directory storage.
//!
//! Derived views (featured, trending) are recomputed from current state on
//! every call rather than cached, so directory reads observe broadcast
//! mutations immediately.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Stream, StreamCategory, UpdateStreamRequest};

/// Repository for stream records
#[async_trait]
pub trait StreamRepository: Send + Sync {
    /// All known streams, live and historical, in stored order.
    async fn list(&self) -> Result<Vec<Stream>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stream>>;
    async fn list_by_category(&self, category: StreamCategory) -> Result<Vec<Stream>>;
    /// Case-insensitive substring match on title, streamer username, and
    /// description. An empty query matches everything.
    async fn search(&self, query: &str) -> Result<Vec<Stream>>;
    /// Top live streams by viewer count; ties keep stored order.
    async fn list_featured(&self, limit: usize) -> Result<Vec<Stream>>;
    /// Most recently started live streams; ties keep stored order.
    async fn list_trending(&self, limit: usize) -> Result<Vec<Stream>>;
    async fn insert(&self, stream: Stream) -> Result<()>;
    /// Shallow-merge `update` into the record, returning it if it exists.
    async fn update(&self, id: Uuid, update: &UpdateStreamRequest) -> Result<Option<Stream>>;
    /// Flip the record to historical: `is_live` cleared, `ended_at` stamped.
    /// The record is retained for history.
    async fn mark_ended(&self, id: Uuid) -> Result<Option<Stream>>;
    /// Whether the identity currently has a live stream anywhere in the
    /// directory. Enforced at this layer so the one-live-stream invariant
    /// holds across controller instances.
    async fn has_live_stream(&self, streamer_id: Uuid) -> Result<bool>;
}

/// In-memory stream directory, insertion-ordered.
#[derive(Debug, Default)]
pub struct InMemoryStreamRepository {
    streams: RwLock<Vec<Stream>>,
}

impl InMemoryStreamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(streams: Vec<Stream>) -> Self {
        Self {
            streams: RwLock::new(streams),
        }
    }
}

#[async_trait]
impl StreamRepository for InMemoryStreamRepository {
    async fn list(&self) -> Result<Vec<Stream>> {
        Ok(self.streams.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stream>> {
        Ok(self.streams.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn list_by_category(&self, category: StreamCategory) -> Result<Vec<Stream>> {
        Ok(self
            .streams
            .read()
            .await
            .iter()
            .filter(|s| s.category == Some(category))
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Stream>> {
        let query = query.to_lowercase();
        Ok(self
            .streams
            .read()
            .await
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&query)
                    || s.streamer.username.to_lowercase().contains(&query)
                    || s
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&query))
            })
            .cloned()
            .collect())
    }

    async fn list_featured(&self, limit: usize) -> Result<Vec<Stream>> {
        let mut live: Vec<Stream> = self
            .streams
            .read()
            .await
            .iter()
            .filter(|s| s.is_live)
            .cloned()
            .collect();
        // Stable sort keeps stored order for equal viewer counts.
        live.sort_by(|a, b| b.viewer_count.cmp(&a.viewer_count));
        live.truncate(limit);
        Ok(live)
    }

    async fn list_trending(&self, limit: usize) -> Result<Vec<Stream>> {
        let mut live: Vec<Stream> = self
            .streams
            .read()
            .await
            .iter()
            .filter(|s| s.is_live)
            .cloned()
            .collect();
        live.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        live.truncate(limit);
        Ok(live)
    }

    async fn insert(&self, stream: Stream) -> Result<()> {
        self.streams.write().await.push(stream);
        Ok(())
    }

    async fn update(&self, id: Uuid, update: &UpdateStreamRequest) -> Result<Option<Stream>> {
        let mut streams = self.streams.write().await;
        Ok(streams.iter_mut().find(|s| s.id == id).map(|stream| {
            update.apply_to(stream);
            stream.clone()
        }))
    }

    async fn mark_ended(&self, id: Uuid) -> Result<Option<Stream>> {
        let mut streams = self.streams.write().await;
        Ok(streams.iter_mut().find(|s| s.id == id).map(|stream| {
            stream.is_live = false;
            stream.ended_at = Some(Utc::now());
            stream.streamer.is_streaming = false;
            stream.clone()
        }))
    }

    async fn has_live_stream(&self, streamer_id: Uuid) -> Result<bool> {
        Ok(self
            .streams
            .read()
            .await
            .iter()
            .any(|s| s.is_live && s.streamer.id == streamer_id))
    }
}
