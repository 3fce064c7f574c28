//! Precondition checks shared by the use cases and the repositories.
//!
//! Each guard either passes (returning whatever context it resolved) or
//! fails with the `DomainError` the caller reports. They never mutate, so a
//! failed guard always leaves the store untouched.

use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
};

pub fn ensure_username_available<'a>(
    users: impl IntoIterator<Item = &'a User>,
    username: &str,
) -> DomainResult<()> {
    if users.into_iter().any(|u| u.username == username) {
        return Err(DomainError::DuplicateUsername(username.to_string()));
    }
    Ok(())
}

pub fn ensure_not_pro(user: &User) -> DomainResult<()> {
    if user.pro {
        return Err(DomainError::AlreadyPro);
    }
    Ok(())
}

/// Free-plan users may hold at most `limit` todos; pro users are unbounded.
pub fn ensure_todo_capacity(user: &User, limit: usize) -> DomainResult<()> {
    if !user.pro && user.todos.len() >= limit {
        return Err(DomainError::QuotaExceeded { limit });
    }
    Ok(())
}

/// Only the canonical hyphenated form (36 chars) is a valid todo id.
pub fn parse_todo_id(raw: &str) -> DomainResult<Uuid> {
    if raw.len() != 36 {
        return Err(DomainError::InvalidId(raw.to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| DomainError::InvalidId(raw.to_string()))
}

/// User ids are not validated on the wire: anything that is not a UUID
/// simply cannot name a user.
pub fn parse_user_id(raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DomainError::NotFound(format!("user {raw}")))
}

pub fn todo_position(user: &User, todo_id: Uuid) -> DomainResult<usize> {
    user.todos
        .iter()
        .position(|t| t.id == todo_id)
        .ok_or(DomainError::TodoNotFound(todo_id))
}

/// Validates `raw_id` and checks it names one of `user`'s own todos.
pub fn resolve_owned_todo(user: &User, raw_id: &str) -> DomainResult<Uuid> {
    let todo_id = parse_todo_id(raw_id)?;
    todo_position(user, todo_id)?;
    Ok(todo_id)
}
