use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::todo::Todo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub pro: bool,
    pub todos: Vec<Todo>,
}

impl User {
    pub fn new(name: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            username,
            pro: false,
            todos: Vec::new(),
        }
    }
}
