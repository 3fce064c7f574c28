use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

#[derive(Object)]
pub struct TodoDto {
    pub id: Uuid,
    pub title: String,
    pub deadline: String,
    pub done: bool,
    pub created_at: String,
}

#[derive(Object)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub pro: bool,
    pub todos: Vec<TodoDto>,
}

#[derive(ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
}

#[derive(ApiResponse)]
pub enum CreateTodoResponse {
    #[oai(status = 201)]
    Created(Json<TodoDto>),
}

#[derive(ApiResponse)]
pub enum DeleteTodoResponse {
    #[oai(status = 204)]
    NoContent,
}
