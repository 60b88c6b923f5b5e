use serde::{Deserialize, Serialize};

use super::stream::StreamCategory;

/// Category reference data shown on the discovery surface.
///
/// Read-only in this scope: the aggregate counters come from the seed data
/// and are not recomputed from the stream directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: StreamCategory,
    pub name: String,
    pub image_url: String,
    pub description: Option<String>,
    pub viewer_count: u32,
    pub active_streams: u32,
}
