use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{User, UserStatus, normalize_email},
    repositories::UserRepository,
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub status: Option<UserStatus>,
    pub email_verified: Option<bool>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> DomainResult<User> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Validation("name must not be blank".to_string()));
        }

        let email = normalize_email(&request.email);
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(DomainError::AlreadyExists(format!("user with email {email}")));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name,
            email,
            image: request.image,
            status: request.status.unwrap_or_default(),
            email_verified: request.email_verified.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        let user = self.repo.insert(&user).await.map_err(|err| {
            DomainError::from_write(err, || format!("user with email {}", user.email))
        })?;
        tracing::info!(user_id = %user.id, "created user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        application::usecases::update_user::{UpdateUserRequest, UpdateUserUseCase},
        domain::models::{UserFilter, UserListQuery},
        infrastructure::repositories::in_memory::InMemoryUserRepository,
    };

    /// Email lookups never see existing rows, as when two requests race past
    /// the pre-check.
    struct RacingRepository {
        inner: InMemoryUserRepository,
    }

    #[async_trait]
    impl UserRepository for RacingRepository {
        async fn list(&self, query: &UserListQuery) -> anyhow::Result<Vec<User>> {
            self.inner.list(query).await
        }

        async fn count(&self, filter: &UserFilter) -> anyhow::Result<u64> {
            self.inner.count(filter).await
        }

        async fn find_by_id(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
            self.inner.find_by_id(id).await
        }

        async fn find_by_email(&self, _email: &str) -> anyhow::Result<Option<User>> {
            Ok(None)
        }

        async fn insert(&self, user: &User) -> anyhow::Result<User> {
            self.inner.insert(user).await
        }

        async fn update(&self, user: &User) -> anyhow::Result<Option<User>> {
            self.inner.update(user).await
        }

        async fn delete(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
            self.inner.delete(id).await
        }
    }

    fn request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: "Grace Hopper".to_string(),
            email: email.to_string(),
            image: None,
            status: None,
            email_verified: None,
        }
    }

    #[tokio::test]
    async fn applies_defaults_and_normalizes_email() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = CreateUserUseCase::new(repo.clone());

        let user = usecase.execute(request(" Grace@Navy.MIL ")).await.unwrap();

        assert_eq!(user.email, "grace@navy.mil");
        assert_eq!(user.status, UserStatus::Active);
        assert!(!user.email_verified);
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(repo.find_by_id(&user.id).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_without_writing() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = CreateUserUseCase::new(repo.clone());
        usecase.execute(request("grace@navy.mil")).await.unwrap();

        let result = usecase.execute(request("GRACE@navy.mil")).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
        assert_eq!(repo.count(&UserFilter::default()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_blank_name() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = CreateUserUseCase::new(repo.clone());

        let mut blank = request("grace@navy.mil");
        blank.name = "   ".to_string();

        assert!(matches!(
            usecase.execute(blank).await,
            Err(DomainError::Validation(_))
        ));
        assert_eq!(repo.count(&UserFilter::default()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unique_violation_on_insert_is_a_conflict() {
        let repo = Arc::new(RacingRepository {
            inner: InMemoryUserRepository::new(),
        });
        let usecase = CreateUserUseCase::new(repo.clone());
        usecase.execute(request("grace@navy.mil")).await.unwrap();

        let result = usecase.execute(request("grace@navy.mil")).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
        assert_eq!(repo.count(&UserFilter::default()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unique_violation_on_update_is_a_conflict() {
        let repo = Arc::new(RacingRepository {
            inner: InMemoryUserRepository::new(),
        });
        let usecase = CreateUserUseCase::new(repo.clone());
        usecase.execute(request("grace@navy.mil")).await.unwrap();
        let other = usecase.execute(request("ada@example.com")).await.unwrap();

        let result = UpdateUserUseCase::new(repo)
            .execute(
                other.id,
                UpdateUserRequest {
                    email: Some("grace@navy.mil".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    }
}
