use std::sync::Arc;

use tracing::info;

use crate::domain::{errors::DomainResult, guards, models::User, repositories::UserRepository};

pub struct DeleteTodoUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteTodoUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user: &User, raw_id: &str) -> DomainResult<()> {
        let todo_id = guards::resolve_owned_todo(user, raw_id)?;
        self.repo.remove_todo(&user.id, &todo_id).await?;

        info!(user_id = %user.id, todo_id = %todo_id, "todo deleted");
        Ok(())
    }
}
