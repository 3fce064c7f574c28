use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub deadline: DateTime<Utc>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(title: String, deadline: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            deadline,
            done: false,
            created_at: Utc::now(),
        }
    }
}

/// Fields a client may overwrite on an existing todo.
#[derive(Debug, Clone)]
pub struct TodoChanges {
    pub title: String,
    pub deadline: DateTime<Utc>,
}

impl TodoChanges {
    pub fn apply(self, todo: &mut Todo) {
        todo.title = self.title;
        todo.deadline = self.deadline;
    }
}
