use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    application::usecases::{create_todo::CreateTodoRequest, update_todo::UpdateTodoRequest},
    domain::models::{Todo, User},
    presentation::http::{
        requests::TodoRequestDto,
        responses::{TodoDto, UserDto},
    },
};

/// `2030-05-01T12:00:00.000Z`: UTC, millisecond precision.
fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn map_todo(todo: &Todo) -> TodoDto {
    TodoDto {
        id: todo.id,
        title: todo.title.clone(),
        deadline: format_timestamp(&todo.deadline),
        done: todo.done,
        created_at: format_timestamp(&todo.created_at),
    }
}

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        username: user.username.clone(),
        pro: user.pro,
        todos: user.todos.iter().map(map_todo).collect(),
    }
}

impl From<TodoRequestDto> for CreateTodoRequest {
    fn from(dto: TodoRequestDto) -> Self {
        CreateTodoRequest {
            title: dto.title,
            deadline: dto.deadline,
        }
    }
}

impl From<TodoRequestDto> for UpdateTodoRequest {
    fn from(dto: TodoRequestDto) -> Self {
        UpdateTodoRequest {
            title: dto.title,
            deadline: dto.deadline,
        }
    }
}
