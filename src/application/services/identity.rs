use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
    repositories::UserRepository,
};

/// Turns the credential a request carries into the acting user.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, credential: &str) -> DomainResult<User>;
}

/// Treats the credential as a plain username.
pub struct UsernameIdentityResolver {
    repo: Arc<dyn UserRepository>,
}

impl UsernameIdentityResolver {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl IdentityResolver for UsernameIdentityResolver {
    async fn resolve(&self, credential: &str) -> DomainResult<User> {
        self.repo
            .find_by_username(credential)
            .await?
            .ok_or_else(|| DomainError::UnknownUser(credential.to_string()))
    }
}
