// Integration tests for the session store
//
// Covers the authentication flows:
// - Registration with validation and duplicate checks
// - Login with the placeholder password check
// - Persistence of the signed-in identity across service instances
// - Logout clearing both the current and the persisted identity

use std::sync::Arc;

use async_trait::async_trait;
use client_core::config::Settings;
use client_core::error::AppError;
use client_core::fixtures;
use client_core::models::{LoginCredentials, RegisterRequest};
use client_core::repository::InMemoryUserRepository;
use client_core::SessionService;
use kv_store::{KeyValueStore, KvError, MemoryKvStore};

fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.api.mock_delay_ms = 0;
    settings
}

fn seeded_service() -> (SessionService, Arc<MemoryKvStore>, Arc<InMemoryUserRepository>) {
    let users = Arc::new(InMemoryUserRepository::seeded(fixtures::seed_users()));
    let storage = Arc::new(MemoryKvStore::new());
    let service = SessionService::new(users.clone(), storage.clone(), test_settings());
    (service, storage, users)
}

fn login(email: &str, password: &str) -> LoginCredentials {
    LoginCredentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn register(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn register_then_login_returns_matching_identity() {
    let (service, _storage, _users) = seeded_service();

    let registered = service
        .register(register("new_user", "new@example.com", "secret"))
        .await
        .unwrap();
    assert_eq!(registered.username, "new_user");
    assert_eq!(registered.email, "new@example.com");
    assert_eq!(registered.followers, 0);
    assert_eq!(registered.following, 0);
    assert!(!registered.is_streaming);

    service.logout().await.unwrap();

    let logged_in = service
        .login(login("new@example.com", "secret"))
        .await
        .unwrap();
    assert_eq!(logged_in.id, registered.id);
    assert_eq!(logged_in.username, "new_user");
    assert_eq!(logged_in.email, "new@example.com");
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let (service, _storage, _users) = seeded_service();

    let err = service
        .register(register("someone_else", "gamemaster@example.com", "secret"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::EmailAlreadyExists));
}

#[tokio::test]
async fn register_rejects_duplicate_username_with_distinct_email() {
    let (service, _storage, _users) = seeded_service();

    let err = service
        .register(register("GameMaster", "different@example.com", "secret"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UsernameAlreadyTaken));
}

#[tokio::test]
async fn register_validates_fields() {
    let (service, _storage, _users) = seeded_service();

    let err = service
        .register(register("ab", "new@example.com", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = service
        .register(register("new_user", "not-an-email", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = service
        .register(register("new_user", "new@example.com", "short"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn register_assigns_placeholder_avatar() {
    let (service, _storage, _users) = seeded_service();

    let user = service
        .register(register("new_user", "new@example.com", "secret"))
        .await
        .unwrap();

    assert_eq!(
        user.avatar_url.as_deref(),
        Some("https://via.placeholder.com/150?text=n")
    );
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn login_rejects_unknown_email() {
    let (service, _storage, _users) = seeded_service();

    let err = service
        .login(login("nobody@example.com", "secret123"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
    assert!(!service.is_authenticated().await);
}

#[tokio::test]
async fn login_rejects_short_password() {
    let (service, _storage, _users) = seeded_service();

    let err = service
        .login(login("gamemaster@example.com", "12345"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn login_sets_current_user_and_persists() {
    let (service, storage, _users) = seeded_service();

    let user = service
        .login(login("gamemaster@example.com", "secret123"))
        .await
        .unwrap();

    assert!(service.is_authenticated().await);
    assert_eq!(service.current_user().await.unwrap().id, user.id);

    let blob = storage.get("user").await.unwrap().expect("user persisted");
    assert!(blob.contains("GameMaster"));
    assert!(storage.get("auth_token").await.unwrap().is_some());
}

// ============================================================================
// Logout and session restore
// ============================================================================

#[tokio::test]
async fn logout_clears_current_and_persisted_identity() {
    let (service, storage, users) = seeded_service();

    service
        .login(login("gamemaster@example.com", "secret123"))
        .await
        .unwrap();
    service.logout().await.unwrap();

    assert!(!service.is_authenticated().await);
    assert!(storage.get("user").await.unwrap().is_none());
    assert!(storage.get("auth_token").await.unwrap().is_none());

    // A fresh service over the same storage observes no identity.
    let fresh = SessionService::new(users, storage, test_settings());
    assert!(fresh.restore_session().await.unwrap().is_none());
}

#[tokio::test]
async fn restore_session_recovers_persisted_identity() {
    let (service, storage, users) = seeded_service();

    let user = service
        .login(login("music@example.com", "secret123"))
        .await
        .unwrap();

    let fresh = SessionService::new(users, storage, test_settings());
    let restored = fresh.restore_session().await.unwrap().expect("session");

    assert_eq!(restored.id, user.id);
    assert_eq!(restored.username, "MusicLover");
    assert!(fresh.is_authenticated().await);
}

#[tokio::test]
async fn restore_session_with_empty_storage_is_none() {
    let (service, _storage, _users) = seeded_service();
    assert!(service.restore_session().await.unwrap().is_none());
}

#[tokio::test]
async fn restore_session_degrades_on_corrupt_record() {
    let (service, storage, _users) = seeded_service();

    storage.set("user", "not json").await.unwrap();

    assert!(service.restore_session().await.unwrap().is_none());
    assert!(!service.is_authenticated().await);
}

#[tokio::test]
async fn session_survives_process_restart_with_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let users = Arc::new(InMemoryUserRepository::seeded(fixtures::seed_users()));

    // "First launch": sign in against a file-backed store.
    {
        let storage = Arc::new(kv_store::FileKvStore::open(&path).await.unwrap());
        let service = SessionService::new(users.clone(), storage, test_settings());
        service
            .login(login("artist@example.com", "secret123"))
            .await
            .unwrap();
    }

    // "Second launch": a fresh store over the same file restores the session.
    let storage = Arc::new(kv_store::FileKvStore::open(&path).await.unwrap());
    let service = SessionService::new(users, storage, test_settings());

    let restored = service.restore_session().await.unwrap().expect("session");
    assert_eq!(restored.username, "ArtisticSoul");
}

// ============================================================================
// Storage failures
// ============================================================================

/// Store whose writes always fail, for exercising the failure path.
struct BrokenKvStore;

#[async_trait]
impl KeyValueStore for BrokenKvStore {
    async fn get(&self, _key: &str) -> kv_store::Result<Option<String>> {
        Err(KvError::Read("storage unavailable".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> kv_store::Result<()> {
        Err(KvError::Write("storage unavailable".into()))
    }

    async fn remove(&self, _keys: &[&str]) -> kv_store::Result<()> {
        Err(KvError::Write("storage unavailable".into()))
    }
}

#[tokio::test]
async fn login_surfaces_storage_write_failure() {
    let users = Arc::new(InMemoryUserRepository::seeded(fixtures::seed_users()));
    let service = SessionService::new(users, Arc::new(BrokenKvStore), test_settings());

    let err = service
        .login(login("gamemaster@example.com", "secret123"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Storage(_)));
}

#[tokio::test]
async fn restore_session_degrades_on_storage_read_failure() {
    let users = Arc::new(InMemoryUserRepository::seeded(fixtures::seed_users()));
    let service = SessionService::new(users, Arc::new(BrokenKvStore), test_settings());

    // Read failures degrade to "no session" instead of surfacing.
    assert!(service.restore_session().await.unwrap().is_none());
}
