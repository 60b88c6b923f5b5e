/// Demo entry point
///
/// Wires the client core together the way the app shell would: storage,
/// seeded repositories, the three services, then a scripted walkthrough of a
/// session (restore, login, browse, broadcast, logout).
use std::sync::Arc;

use anyhow::{Context, Result};
use client_core::{
    config::Settings,
    fixtures,
    models::{CreateStreamRequest, LoginCredentials, UpdateStreamRequest},
    repository::{InMemoryStreamRepository, InMemoryUserRepository},
    BroadcastService, SessionService, StreamDirectory,
};
use kv_store::{FileKvStore, KeyValueStore, MemoryKvStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "client_core=info,info".into()),
        )
        .with_target(false)
        .init();

    info!("Starting Prism client core demo");

    let settings = Settings::load().context("Failed to load configuration")?;

    let storage: Arc<dyn KeyValueStore> = match &settings.storage.path {
        Some(path) => {
            info!(path = %path, "using file-backed storage");
            Arc::new(
                FileKvStore::open(path)
                    .await
                    .context("Failed to open storage file")?,
            )
        }
        None => {
            info!("using in-memory storage");
            Arc::new(MemoryKvStore::new())
        }
    };

    let seed_users = fixtures::seed_users();
    let seed_streams = fixtures::seed_streams(&seed_users);
    let users = Arc::new(InMemoryUserRepository::seeded(seed_users));
    let streams = Arc::new(InMemoryStreamRepository::seeded(seed_streams));

    let session = SessionService::new(users.clone(), storage.clone(), settings.clone());
    let directory = StreamDirectory::new(
        streams.clone(),
        fixtures::seed_categories(),
        settings.clone(),
    );
    let broadcast = BroadcastService::new(streams, users, settings);

    // Restore a previous session if storage remembers one, otherwise sign in.
    let user = match session.restore_session().await? {
        Some(user) => user,
        None => {
            session
                .login(LoginCredentials {
                    email: "artist@example.com".to_string(),
                    password: "secret123".to_string(),
                })
                .await?
        }
    };
    info!(username = %user.username, "signed in");

    for stream in directory.featured().await? {
        info!(title = %stream.title, viewers = stream.viewer_count, "featured");
    }
    for stream in directory.trending().await? {
        info!(title = %stream.title, started_at = %stream.started_at, "trending");
    }

    let results = directory.search("music").await?;
    info!(count = results.len(), "search results for 'music'");

    let stream = broadcast
        .start_stream(
            &user,
            CreateStreamRequest {
                title: "Sketching session".to_string(),
                description: Some("Warm-up sketches and requests".to_string()),
                category: None,
                tags: Some(vec!["Creative".to_string()]),
            },
        )
        .await?;
    info!(stream_id = %stream.id, "went live");

    broadcast
        .update_stream_info(
            stream.id,
            UpdateStreamRequest {
                title: Some("Sketching session - requests open".to_string()),
                ..Default::default()
            },
        )
        .await?;

    broadcast.end_stream().await?;
    session.logout().await?;
    info!("demo finished");

    Ok(())
}
