use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{User, UserStatus, normalize_email},
    repositories::UserRepository,
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

#[derive(Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// `Some(None)` clears the image, `None` leaves it untouched.
    pub image: Option<Option<String>>,
    pub status: Option<UserStatus>,
    pub email_verified: Option<bool>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: Uuid, request: UpdateUserRequest) -> DomainResult<User> {
        let mut user = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))?;

        if let Some(name) = request.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(DomainError::Validation("name must not be blank".to_string()));
            }
            user.name = name;
        }

        if let Some(email) = request.email {
            let email = normalize_email(&email);
            if email != user.email {
                if let Some(owner) = self.repo.find_by_email(&email).await? {
                    if owner.id != id {
                        return Err(DomainError::AlreadyExists(format!("user with email {email}")));
                    }
                }
                user.email = email;
            }
        }

        if let Some(image) = request.image {
            user.image = image;
        }
        if let Some(status) = request.status {
            user.status = status;
        }
        if let Some(email_verified) = request.email_verified {
            user.email_verified = email_verified;
        }
        user.updated_at = Utc::now();

        self.repo
            .update(&user)
            .await
            .map_err(|err| {
                DomainError::from_write(err, || format!("user with email {}", user.email))
            })?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}
