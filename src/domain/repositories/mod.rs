use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::DomainResult,
    models::{Todo, TodoChanges, User},
};

/// Owner of the user directory and every user's todo list.
///
/// Each method is one atomic unit: its preconditions are checked and its
/// mutation applied without another caller observing the state in between.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `DuplicateUsername` when the username is taken.
    async fn insert(&self, user: User) -> DomainResult<User>;
    async fn get(&self, id: &Uuid) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
    async fn upgrade_to_pro(&self, id: &Uuid) -> DomainResult<User>;

    async fn list_todos(&self, user_id: &Uuid) -> DomainResult<Vec<Todo>>;
    /// Appends unless a free-plan user already holds `limit` todos.
    async fn append_todo(&self, user_id: &Uuid, todo: Todo, limit: usize) -> DomainResult<Todo>;
    async fn update_todo(
        &self,
        user_id: &Uuid,
        todo_id: &Uuid,
        changes: TodoChanges,
    ) -> DomainResult<Todo>;
    async fn mark_todo_done(&self, user_id: &Uuid, todo_id: &Uuid) -> DomainResult<Todo>;
    async fn remove_todo(&self, user_id: &Uuid, todo_id: &Uuid) -> DomainResult<()>;
}
