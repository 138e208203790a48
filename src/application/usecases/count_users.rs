use std::sync::Arc;

use crate::domain::{errors::DomainResult, models::UserFilter, repositories::UserRepository};

pub struct CountUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl CountUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: UserFilter) -> DomainResult<u64> {
        Ok(self.repo.count(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::usecases::create_user::{CreateUserRequest, CreateUserUseCase},
        domain::models::UserStatus,
        infrastructure::repositories::in_memory::InMemoryUserRepository,
    };

    async fn seeded() -> Arc<InMemoryUserRepository> {
        let repo = Arc::new(InMemoryUserRepository::new());
        let create = CreateUserUseCase::new(repo.clone());
        for (name, email, status) in [
            ("Ada Lovelace", "ada@example.com", UserStatus::Active),
            ("Alan Turing", "alan@example.com", UserStatus::Suspended),
            ("Grace Hopper", "grace@navy.mil", UserStatus::Suspended),
        ] {
            create
                .execute(CreateUserRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    image: None,
                    status: Some(status),
                    email_verified: None,
                })
                .await
                .unwrap();
        }
        repo
    }

    fn filter(search: Option<&str>, status: Option<UserStatus>) -> UserFilter {
        UserFilter {
            search: search.map(str::to_string),
            status,
        }
    }

    #[tokio::test]
    async fn counts_every_user_without_filters() {
        let usecase = CountUsersUseCase::new(seeded().await);
        assert_eq!(usecase.execute(UserFilter::default()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn counts_only_matching_users() {
        let usecase = CountUsersUseCase::new(seeded().await);

        assert_eq!(usecase.execute(filter(Some("EXAMPLE"), None)).await.unwrap(), 2);
        assert_eq!(
            usecase
                .execute(filter(None, Some(UserStatus::Suspended)))
                .await
                .unwrap(),
            2
        );
        assert_eq!(
            usecase
                .execute(filter(Some("example.com"), Some(UserStatus::Suspended)))
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            usecase
                .execute(filter(Some("nobody"), Some(UserStatus::Active)))
                .await
                .unwrap(),
            0
        );
    }
}
