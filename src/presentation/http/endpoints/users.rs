use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::create_user::CreateUserRequest,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::ApiError,
        mappers::map_user,
        requests::CreateUserRequestDto,
        responses::{CreateUserResponse, UserDto},
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        request: Json<CreateUserRequestDto>,
    ) -> Result<CreateUserResponse, ApiError> {
        let Json(request) = request;
        let user = self
            .state
            .create_user_usecase
            .execute(CreateUserRequest {
                name: request.name,
                username: request.username,
            })
            .await?;

        Ok(CreateUserResponse::Created(Json(map_user(&user))))
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> Result<Json<UserDto>, ApiError> {
        let user = self.state.get_user_usecase.execute(&id.0).await?;
        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id/pro", method = "patch", tag = EndpointsTags::Users)]
    pub async fn upgrade_to_pro(&self, id: Path<String>) -> Result<Json<UserDto>, ApiError> {
        let user = self.state.upgrade_to_pro_usecase.execute(&id.0).await?;
        Ok(Json(map_user(&user)))
    }
}
