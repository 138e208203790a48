use std::sync::Arc;

use crate::domain::{
    errors::DomainResult,
    models::{UserListQuery, UserPage},
    repositories::UserRepository,
};

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: UserListQuery) -> DomainResult<UserPage> {
        let users = self.repo.list(&query).await?;
        let total = self.repo.count(&query.filter).await?;

        Ok(UserPage::new(users, total, query.limit, query.offset))
    }
}
