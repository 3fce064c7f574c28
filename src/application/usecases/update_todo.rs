use std::sync::Arc;

use crate::domain::{
    errors::DomainResult,
    guards,
    models::{Todo, TodoChanges, User},
    repositories::UserRepository,
    value_objects::parse_deadline,
};

pub struct UpdateTodoUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateTodoRequest {
    pub title: String,
    pub deadline: String,
}

impl UpdateTodoUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user: &User,
        raw_id: &str,
        request: UpdateTodoRequest,
    ) -> DomainResult<Todo> {
        let todo_id = guards::resolve_owned_todo(user, raw_id)?;
        let changes = TodoChanges {
            title: request.title,
            deadline: parse_deadline(&request.deadline)?,
        };

        self.repo.update_todo(&user.id, &todo_id, changes).await
    }
}
