use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    errors::UniqueViolation,
    models::{SortOrder, User, UserFilter, UserListQuery, UserSortField},
    repositories::{DatabaseProbe, UserRepository},
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self, query: &UserListQuery) -> anyhow::Result<Vec<User>> {
        let users = self.users.read().await;
        let mut matched: Vec<User> = users
            .values()
            .filter(|u| query.filter.matches(u))
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            let ordering = match query.sort_by {
                UserSortField::Name => a.name.cmp(&b.name),
                UserSortField::Email => a.email.cmp(&b.email),
                UserSortField::Status => a.status.as_str().cmp(b.status.as_str()),
                UserSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                UserSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            };
            match query.sort_order {
                SortOrder::Asc => ordering.then_with(|| a.id.cmp(&b.id)),
                SortOrder::Desc => ordering.reverse().then_with(|| a.id.cmp(&b.id)),
            }
        });

        Ok(matched
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }

    async fn count(&self, filter: &UserFilter) -> anyhow::Result<u64> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| filter.matches(u)).count() as u64)
    }

    async fn find_by_id(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: &User) -> anyhow::Result<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(email_taken());
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> anyhow::Result<Option<User>> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(email_taken());
        }
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.remove(id))
    }
}

fn email_taken() -> anyhow::Error {
    UniqueViolation {
        constraint: "users_email_key".to_string(),
    }
    .into()
}

/// Probe with a switchable outcome, for running without a database.
pub struct StaticDatabaseProbe {
    healthy: AtomicBool,
}

impl StaticDatabaseProbe {
    pub fn healthy() -> Self {
        Self {
            healthy: AtomicBool::new(true),
        }
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl DatabaseProbe for StaticDatabaseProbe {
    async fn ping(&self) -> anyhow::Result<()> {
        if self.healthy.load(Ordering::SeqCst) {
            Ok(())
        } else {
            anyhow::bail!("database unavailable")
        }
    }
}
