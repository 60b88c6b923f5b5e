//! Session store: the signed-in identity and its lifecycle.
//!
//! Owns the current identity, persists it to the durable key-value slot so a
//! restart can restore it, and exposes the login/register/logout mutations.
//! The password check is a placeholder for real verification - no hash is
//! stored or compared in this scope.

use std::sync::Arc;

use kv_store::KeyValueStore;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{info, warn};
use validator::Validate;

use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::models::{LoginCredentials, RegisterRequest, User};
use crate::repository::UserRepository;

use super::simulate_api_delay;

pub struct SessionService {
    users: Arc<dyn UserRepository>,
    storage: Arc<dyn KeyValueStore>,
    settings: Settings,
    current: RwLock<Option<User>>,
}

impl SessionService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        storage: Arc<dyn KeyValueStore>,
        settings: Settings,
    ) -> Self {
        Self {
            users,
            storage,
            settings,
            current: RwLock::new(None),
        }
    }

    /// Sign in with email and password.
    ///
    /// Both an unknown email and a too-short password fail with the same
    /// `InvalidCredentials` so the error does not reveal which part was wrong.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<User> {
        simulate_api_delay(self.settings.api.mock_delay()).await;

        let user = self
            .users
            .find_by_email(&credentials.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if credentials.password.len() < self.settings.auth.min_password_length {
            warn!(email = %credentials.email, "login rejected: password check failed");
            return Err(AppError::InvalidCredentials);
        }

        self.persist(&user).await?;
        *self.current.write().await = Some(user.clone());

        info!(user_id = %user.id, username = %user.username, "user logged in");
        Ok(user)
    }

    /// Create a new account and sign it in.
    pub async fn register(&self, request: RegisterRequest) -> Result<User> {
        simulate_api_delay(self.settings.api.mock_delay()).await;

        request.validate()?;
        if request.password.len() < self.settings.auth.min_password_length {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                self.settings.auth.min_password_length
            )));
        }

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }
        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::UsernameAlreadyTaken);
        }

        let avatar_url = request
            .username
            .chars()
            .next()
            .map(|initial| format!("https://via.placeholder.com/150?text={}", initial));
        let user = User::new(request.username, request.email, avatar_url);

        self.users.insert(user.clone()).await?;
        self.persist(&user).await?;
        *self.current.write().await = Some(user.clone());

        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Sign out: clears the current identity and the persisted record.
    pub async fn logout(&self) -> Result<()> {
        simulate_api_delay(self.settings.api.mock_delay()).await;

        self.storage
            .remove(&[
                self.settings.storage.user_key.as_str(),
                self.settings.storage.token_key.as_str(),
            ])
            .await?;

        *self.current.write().await = None;
        info!("user logged out");
        Ok(())
    }

    /// Restore the persisted identity at startup.
    ///
    /// Absence is not an error, and a broken persisted record degrades to "no
    /// session" rather than surfacing to the user.
    pub async fn restore_session(&self) -> Result<Option<User>> {
        let raw = match self.storage.get(&self.settings.storage.user_key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to read persisted session, starting signed out");
                return Ok(None);
            }
        };

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                info!(user_id = %user.id, username = %user.username, "session restored");
                *self.current.write().await = Some(user.clone());
                Ok(Some(user))
            }
            Err(e) => {
                warn!(error = %e, "persisted session is corrupt, starting signed out");
                Ok(None)
            }
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Write the identity blob and a fresh opaque token to durable storage.
    async fn persist(&self, user: &User) -> Result<()> {
        let blob = serde_json::to_string(user)
            .map_err(|e| AppError::Internal(format!("failed to serialize user: {}", e)))?;

        self.storage
            .set(&self.settings.storage.user_key, &blob)
            .await?;
        self.storage
            .set(&self.settings.storage.token_key, &issue_token())
            .await?;
        Ok(())
    }
}

/// Opaque session token. Random bytes, hex-encoded; nothing validates it in
/// this scope, it only has to exist and be removable on logout.
fn issue_token() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}
