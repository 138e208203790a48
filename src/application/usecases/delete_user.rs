use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
    repositories::UserRepository,
};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: Uuid) -> DomainResult<User> {
        let deleted = self
            .repo
            .delete(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))?;

        tracing::info!(user_id = %id, "deleted user");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    #[tokio::test]
    async fn deleting_missing_user_is_not_found() {
        let usecase = DeleteUserUseCase::new(Arc::new(InMemoryUserRepository::new()));
        assert!(matches!(
            usecase.execute(Uuid::new_v4()).await,
            Err(DomainError::NotFound(_))
        ));
    }
}
