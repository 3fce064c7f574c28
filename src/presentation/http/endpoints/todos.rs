use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path},
    payload::Json,
};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    errors::ApiError,
    mappers::map_todo,
    requests::TodoRequestDto,
    responses::{CreateTodoResponse, DeleteTodoResponse, TodoDto},
    security::UsernameHeader,
};

#[derive(Clone)]
pub struct TodosEndpoints {
    state: Arc<ApiState>,
}

impl TodosEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl TodosEndpoints {
    #[oai(path = "/todos", method = "get", tag = EndpointsTags::Todos)]
    pub async fn list_todos(
        &self,
        username: Header<Option<String>>,
    ) -> Result<Json<Vec<TodoDto>>, ApiError> {
        let user = UsernameHeader(username.0)
            .into_user(&*self.state.identity)
            .await?;
        let todos = self.state.list_todos_usecase.execute(&user).await?;

        Ok(Json(todos.iter().map(map_todo).collect()))
    }

    #[oai(path = "/todos", method = "post", tag = EndpointsTags::Todos)]
    pub async fn create_todo(
        &self,
        username: Header<Option<String>>,
        request: Json<TodoRequestDto>,
    ) -> Result<CreateTodoResponse, ApiError> {
        let user = UsernameHeader(username.0)
            .into_user(&*self.state.identity)
            .await?;
        let todo = self
            .state
            .create_todo_usecase
            .execute(&user, request.0.into())
            .await?;

        Ok(CreateTodoResponse::Created(Json(map_todo(&todo))))
    }

    #[oai(path = "/todos/:id", method = "put", tag = EndpointsTags::Todos)]
    pub async fn update_todo(
        &self,
        username: Header<Option<String>>,
        id: Path<String>,
        request: Json<TodoRequestDto>,
    ) -> Result<Json<TodoDto>, ApiError> {
        let user = UsernameHeader(username.0)
            .into_user(&*self.state.identity)
            .await?;
        let todo = self
            .state
            .update_todo_usecase
            .execute(&user, &id.0, request.0.into())
            .await?;

        Ok(Json(map_todo(&todo)))
    }

    #[oai(path = "/todos/:id/done", method = "patch", tag = EndpointsTags::Todos)]
    pub async fn mark_todo_done(
        &self,
        username: Header<Option<String>>,
        id: Path<String>,
    ) -> Result<Json<TodoDto>, ApiError> {
        let user = UsernameHeader(username.0)
            .into_user(&*self.state.identity)
            .await?;
        let todo = self
            .state
            .mark_todo_done_usecase
            .execute(&user, &id.0)
            .await?;

        Ok(Json(map_todo(&todo)))
    }

    #[oai(path = "/todos/:id", method = "delete", tag = EndpointsTags::Todos)]
    pub async fn delete_todo(
        &self,
        username: Header<Option<String>>,
        id: Path<String>,
    ) -> Result<DeleteTodoResponse, ApiError> {
        let user = UsernameHeader(username.0)
            .into_user(&*self.state.identity)
            .await?;
        self.state
            .delete_todo_usecase
            .execute(&user, &id.0)
            .await?;

        Ok(DeleteTodoResponse::NoContent)
    }
}
