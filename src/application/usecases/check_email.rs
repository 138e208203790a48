use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    errors::DomainResult,
    models::normalize_email,
    repositories::UserRepository,
};

pub struct CheckEmailUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CheckEmailResponse {
    pub email: String,
    pub available: bool,
}

impl CheckEmailUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// `exclude_id` lets an edit form check its own address without reporting
    /// a conflict with itself.
    pub async fn execute(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> DomainResult<CheckEmailResponse> {
        let email = normalize_email(email);
        let owner = self.repo.find_by_email(&email).await?;
        let available = match owner {
            Some(user) => Some(user.id) == exclude_id,
            None => true,
        };

        Ok(CheckEmailResponse { email, available })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::usecases::create_user::{CreateUserRequest, CreateUserUseCase},
        infrastructure::repositories::in_memory::InMemoryUserRepository,
    };

    #[tokio::test]
    async fn taken_email_is_available_only_to_its_owner() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let owner = CreateUserUseCase::new(repo.clone())
            .execute(CreateUserRequest {
                name: "Owner".to_string(),
                email: "owner@example.com".to_string(),
                image: None,
                status: None,
                email_verified: None,
            })
            .await
            .unwrap();
        let usecase = CheckEmailUseCase::new(repo);

        assert!(!usecase.execute("Owner@example.com", None).await.unwrap().available);
        assert!(usecase.execute("owner@example.com", Some(owner.id)).await.unwrap().available);
        assert!(usecase.execute("free@example.com", None).await.unwrap().available);
    }
}
