//! Durable key-value storage for client state.
//!
//! The app keeps a handful of small blobs (the signed-in user, the session
//! token) in whatever slot the platform provides. This crate abstracts that
//! slot behind [`KeyValueStore`] so the core never touches the platform
//! directly: [`MemoryKvStore`] backs tests and ephemeral runs, [`FileKvStore`]
//! persists to a single JSON file across restarts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Storage layer errors
#[derive(Debug, Error)]
pub enum KvError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),
}

/// A durable key-value slot with string keys and string values.
///
/// `remove` takes a batch of keys so that related entries (user blob plus
/// session token) can be cleared together on logout.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, keys: &[&str]) -> Result<()>;
}

/// In-memory store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.entries.remove(*key);
        }
        Ok(())
    }
}

/// File-backed store: the whole map is serialized to one JSON file on every
/// mutation, mirroring how mobile key-value storage behaves.
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    entries: DashMap<String, String>,
}

impl FileKvStore {
    /// Open the store at `path`, loading existing entries if the file is
    /// present. A missing file is an empty store, not an error.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = DashMap::new();
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                let parsed: BTreeMap<String, String> = serde_json::from_str(&raw)
                    .map_err(|e| KvError::Read(format!("corrupt store file: {}", e)))?;
                for (key, value) in parsed {
                    entries.insert(key, value);
                }
                debug!(path = %path.display(), keys = entries.len(), "loaded key-value store");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no existing store file, starting empty");
            }
            Err(e) => return Err(KvError::Read(e.to_string())),
        }

        Ok(Self { path, entries })
    }

    async fn flush(&self) -> Result<()> {
        // Snapshot into an ordered map so the file output is stable.
        let snapshot: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        let raw = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| KvError::Write(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| KvError::Write(e.to_string()))?;
            }
        }

        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to flush key-value store");
            KvError::Write(e.to_string())
        })
    }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush().await
    }

    async fn remove(&self, keys: &[&str]) -> Result<()> {
        let mut changed = false;
        for key in keys {
            changed |= self.entries.remove(*key).is_some();
        }
        if changed {
            self.flush().await?;
        }
        Ok(())
    }
}
