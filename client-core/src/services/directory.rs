//! Stream directory: read-only discovery surface over the stream collection.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::models::{Category, Stream, StreamCategory};
use crate::repository::StreamRepository;

use super::simulate_api_delay;

pub struct StreamDirectory {
    streams: Arc<dyn StreamRepository>,
    categories: Vec<Category>,
    settings: Settings,
}

impl StreamDirectory {
    pub fn new(
        streams: Arc<dyn StreamRepository>,
        categories: Vec<Category>,
        settings: Settings,
    ) -> Self {
        Self {
            streams,
            categories,
            settings,
        }
    }

    /// All known streams in stored order, live and historical.
    pub async fn list_streams(&self) -> Result<Vec<Stream>> {
        simulate_api_delay(self.settings.api.mock_delay()).await;
        let streams = self.streams.list().await?;
        debug!(count = streams.len(), "listed streams");
        Ok(streams)
    }

    pub async fn get_stream(&self, id: Uuid) -> Result<Stream> {
        simulate_api_delay(self.settings.api.mock_delay()).await;
        self.streams.find_by_id(id).await?.ok_or_else(|| {
            warn!(stream_id = %id, "stream lookup missed");
            AppError::StreamNotFound(id)
        })
    }

    pub async fn list_by_category(&self, category: StreamCategory) -> Result<Vec<Stream>> {
        simulate_api_delay(self.settings.api.mock_delay()).await;
        Ok(self.streams.list_by_category(category).await?)
    }

    /// Case-insensitive search across title, streamer username, and
    /// description. An empty query returns everything.
    pub async fn search(&self, query: &str) -> Result<Vec<Stream>> {
        simulate_api_delay(self.settings.api.mock_delay()).await;
        let results = self.streams.search(query).await?;
        debug!(query, count = results.len(), "searched streams");
        Ok(results)
    }

    /// Top live streams by viewer count, recomputed on every call.
    pub async fn featured(&self) -> Result<Vec<Stream>> {
        simulate_api_delay(self.settings.api.mock_delay()).await;
        Ok(self
            .streams
            .list_featured(self.settings.stream.featured_limit)
            .await?)
    }

    /// Most recently started live streams, recomputed on every call.
    pub async fn trending(&self) -> Result<Vec<Stream>> {
        simulate_api_delay(self.settings.api.mock_delay()).await;
        Ok(self
            .streams
            .list_trending(self.settings.stream.trending_limit)
            .await?)
    }

    /// Category reference data. Static in this scope, so no simulated call.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}
