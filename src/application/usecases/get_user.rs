use std::sync::Arc;

use crate::domain::{
    errors::{DomainError, DomainResult},
    guards,
    models::User,
    repositories::UserRepository,
};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> DomainResult<User> {
        let id = guards::parse_user_id(raw_id)?;
        self.repo
            .get(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}
