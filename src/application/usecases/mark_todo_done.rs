use std::sync::Arc;

use crate::domain::{
    errors::DomainResult,
    guards,
    models::{Todo, User},
    repositories::UserRepository,
};

pub struct MarkTodoDoneUseCase {
    repo: Arc<dyn UserRepository>,
}

impl MarkTodoDoneUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user: &User, raw_id: &str) -> DomainResult<Todo> {
        let todo_id = guards::resolve_owned_todo(user, raw_id)?;
        self.repo.mark_todo_done(&user.id, &todo_id).await
    }
}
