use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::{
        services::identity::{IdentityResolver, UsernameIdentityResolver},
        usecases::{
            create_todo::{CreateTodoConfig, CreateTodoUseCase},
            create_user::CreateUserUseCase,
            delete_todo::DeleteTodoUseCase,
            get_user::GetUserUseCase,
            list_todos::ListTodosUseCase,
            mark_todo_done::MarkTodoDoneUseCase,
            update_todo::UpdateTodoUseCase,
            upgrade_to_pro::UpgradeToProUseCase,
        },
    },
    config::Config,
    domain::repositories::UserRepository,
};

pub struct ApiState {
    pub identity: Arc<dyn IdentityResolver>,
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub upgrade_to_pro_usecase: Arc<UpgradeToProUseCase>,
    pub list_todos_usecase: Arc<ListTodosUseCase>,
    pub create_todo_usecase: Arc<CreateTodoUseCase>,
    pub update_todo_usecase: Arc<UpdateTodoUseCase>,
    pub mark_todo_done_usecase: Arc<MarkTodoDoneUseCase>,
    pub delete_todo_usecase: Arc<DeleteTodoUseCase>,
}

impl ApiState {
    pub fn new(repo: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self {
            identity: Arc::new(UsernameIdentityResolver::new(repo.clone())),
            create_user_usecase: Arc::new(CreateUserUseCase::new(repo.clone())),
            get_user_usecase: Arc::new(GetUserUseCase::new(repo.clone())),
            upgrade_to_pro_usecase: Arc::new(UpgradeToProUseCase::new(repo.clone())),
            list_todos_usecase: Arc::new(ListTodosUseCase::new(repo.clone())),
            create_todo_usecase: Arc::new(CreateTodoUseCase::new(
                repo.clone(),
                CreateTodoConfig {
                    free_plan_limit: config.free_plan_todo_limit,
                },
            )),
            update_todo_usecase: Arc::new(UpdateTodoUseCase::new(repo.clone())),
            mark_todo_done_usecase: Arc::new(MarkTodoDoneUseCase::new(repo.clone())),
            delete_todo_usecase: Arc::new(DeleteTodoUseCase::new(repo)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
    Todos,
}
