use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::User;

/// Repository for identity records
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn insert(&self, user: User) -> Result<()>;
    /// Toggle the streaming flag, returning the updated record if it exists.
    async fn set_streaming(&self, user_id: Uuid, is_streaming: bool) -> Result<Option<User>>;
}

/// In-memory identity directory, insertion-ordered.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<()> {
        self.users.write().await.push(user);
        Ok(())
    }

    async fn set_streaming(&self, user_id: Uuid, is_streaming: bool) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == user_id).map(|user| {
            user.is_streaming = is_streaming;
            user.clone()
        }))
    }
}
