use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    guards,
    models::{Todo, TodoChanges, User},
    repositories::UserRepository,
};

/// Process-local store. Lives as long as the `AppState` that owns it.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn with_user_mut<T>(
        &self,
        user_id: &Uuid,
        f: impl FnOnce(&mut User) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| DomainError::NotFound(format!("user {user_id}")))?;
        f(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;
        guards::ensure_username_available(users.values(), &user.username)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn upgrade_to_pro(&self, id: &Uuid) -> DomainResult<User> {
        self.with_user_mut(id, |user| {
            guards::ensure_not_pro(user)?;
            user.pro = true;
            Ok(user.clone())
        })
        .await
    }

    async fn list_todos(&self, user_id: &Uuid) -> DomainResult<Vec<Todo>> {
        let users = self.users.read().await;
        users
            .get(user_id)
            .map(|u| u.todos.clone())
            .ok_or_else(|| DomainError::NotFound(format!("user {user_id}")))
    }

    async fn append_todo(&self, user_id: &Uuid, todo: Todo, limit: usize) -> DomainResult<Todo> {
        self.with_user_mut(user_id, |user| {
            guards::ensure_todo_capacity(user, limit)?;
            user.todos.push(todo.clone());
            Ok(todo)
        })
        .await
    }

    async fn update_todo(
        &self,
        user_id: &Uuid,
        todo_id: &Uuid,
        changes: TodoChanges,
    ) -> DomainResult<Todo> {
        self.with_user_mut(user_id, |user| {
            let index = guards::todo_position(user, *todo_id)?;
            let todo = &mut user.todos[index];
            changes.apply(todo);
            Ok(todo.clone())
        })
        .await
    }

    async fn mark_todo_done(&self, user_id: &Uuid, todo_id: &Uuid) -> DomainResult<Todo> {
        self.with_user_mut(user_id, |user| {
            let index = guards::todo_position(user, *todo_id)?;
            let todo = &mut user.todos[index];
            todo.done = true;
            Ok(todo.clone())
        })
        .await
    }

    async fn remove_todo(&self, user_id: &Uuid, todo_id: &Uuid) -> DomainResult<()> {
        self.with_user_mut(user_id, |user| {
            let index = user
                .todos
                .iter()
                .position(|t| t.id == *todo_id)
                .ok_or_else(|| DomainError::NotFound(format!("todo {todo_id}")))?;
            user.todos.remove(index);
            Ok(())
        })
        .await
    }
}
