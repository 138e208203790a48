use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{User, UserFilter, UserListQuery};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, query: &UserListQuery) -> anyhow::Result<Vec<User>>;
    async fn count(&self, filter: &UserFilter) -> anyhow::Result<u64>;
    async fn find_by_id(&self, id: &Uuid) -> anyhow::Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn insert(&self, user: &User) -> anyhow::Result<User>;
    /// Returns `None` when no row with `user.id` exists.
    async fn update(&self, user: &User) -> anyhow::Result<Option<User>>;
    /// Returns the removed row, or `None` when nothing was deleted.
    async fn delete(&self, id: &Uuid) -> anyhow::Result<Option<User>>;
}

#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn ping(&self) -> anyhow::Result<()>;
}
