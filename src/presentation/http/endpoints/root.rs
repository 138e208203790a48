use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::{
        services::devtools::DevToolsService,
        usecases::{
            check_email::CheckEmailUseCase, count_users::CountUsersUseCase,
            create_user::CreateUserUseCase, delete_user::DeleteUserUseCase,
            get_user::GetUserUseCase, health::HealthUseCase, list_users::ListUsersUseCase,
            update_user::UpdateUserUseCase,
        },
    },
    domain::repositories::UserRepository,
};

#[derive(Clone)]
pub struct ApiState {
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub update_user_usecase: Arc<UpdateUserUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
    pub check_email_usecase: Arc<CheckEmailUseCase>,
    pub count_users_usecase: Arc<CountUsersUseCase>,
    pub health_usecase: Arc<HealthUseCase>,
    pub devtools: Arc<DevToolsService>,
}

impl ApiState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        health: HealthUseCase,
        devtools: Arc<DevToolsService>,
    ) -> Self {
        Self {
            list_users_usecase: Arc::new(ListUsersUseCase::new(users.clone())),
            get_user_usecase: Arc::new(GetUserUseCase::new(users.clone())),
            create_user_usecase: Arc::new(CreateUserUseCase::new(users.clone())),
            update_user_usecase: Arc::new(UpdateUserUseCase::new(users.clone())),
            delete_user_usecase: Arc::new(DeleteUserUseCase::new(users.clone())),
            check_email_usecase: Arc::new(CheckEmailUseCase::new(users.clone())),
            count_users_usecase: Arc::new(CountUsersUseCase::new(users)),
            health_usecase: Arc::new(health),
            devtools,
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
    DevTools,
}
