use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{errors::DomainResult, guards, models::User, repositories::UserRepository};

pub struct UpgradeToProUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpgradeToProUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> DomainResult<User> {
        let id = guards::parse_user_id(raw_id)?;
        let user = self.repo.upgrade_to_pro(&id).await.inspect_err(|err| {
            debug!(user_id = %id, error = %err, "pro upgrade refused");
        })?;

        info!(user_id = %user.id, "user upgraded to pro");
        Ok(user)
    }
}
