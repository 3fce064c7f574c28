use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
    repositories::UserRepository,
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> DomainResult<User> {
        let user = User::new(request.name, request.username);

        match self.repo.insert(user).await {
            Ok(user) => {
                info!(user_id = %user.id, username = %user.username, "user created");
                Ok(user)
            }
            Err(err @ DomainError::DuplicateUsername(_)) => {
                warn!(error = %err, "user creation refused");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
