use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainResult, models::User, repositories::UserRepository};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// A missing user is `Ok(None)`; callers decide whether that is an error.
    pub async fn execute(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.repo.find_by_id(&id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    #[tokio::test]
    async fn missing_user_is_none() {
        let usecase = GetUserUseCase::new(Arc::new(InMemoryUserRepository::new()));
        assert!(usecase.execute(Uuid::new_v4()).await.unwrap().is_none());
    }
}
