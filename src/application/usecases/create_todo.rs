use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    errors::DomainResult,
    models::{Todo, User},
    repositories::UserRepository,
    value_objects::parse_deadline,
};

pub struct CreateTodoConfig {
    pub free_plan_limit: usize,
}

pub struct CreateTodoUseCase {
    repo: Arc<dyn UserRepository>,
    config: CreateTodoConfig,
}

pub struct CreateTodoRequest {
    pub title: String,
    pub deadline: String,
}

impl CreateTodoUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, config: CreateTodoConfig) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, user: &User, request: CreateTodoRequest) -> DomainResult<Todo> {
        let deadline = parse_deadline(&request.deadline)?;
        let todo = Todo::new(request.title, deadline);

        let todo = self
            .repo
            .append_todo(&user.id, todo, self.config.free_plan_limit)
            .await
            .inspect_err(|err| warn!(user_id = %user.id, error = %err, "todo creation refused"))?;

        info!(user_id = %user.id, todo_id = %todo.id, "todo created");
        Ok(todo)
    }
}
