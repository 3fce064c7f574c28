use std::sync::Arc;

use crate::domain::{
    errors::DomainResult,
    models::{Todo, User},
    repositories::UserRepository,
};

pub struct ListTodosUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListTodosUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user: &User) -> DomainResult<Vec<Todo>> {
        self.repo.list_todos(&user.id).await
    }
}
