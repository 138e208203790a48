use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use crate::{
    domain::models::{UserFilter, UserListQuery},
    presentation::{
        http::{
            endpoints::root::{ApiState, EndpointsTags},
            errors::HttpError,
            mappers::{map_create_user, map_update_user, map_user, map_user_page},
            requests::{CreateUserRequestDto, UpdateUserRequestDto},
            responses::{
                CheckEmailResponseDto, CountResponseDto, CreateUserResponse,
                DeleteUserResponseDto, PaginatedUsersDto, UserDto,
            },
        },
        models::{SortOrderKind, UserSortKind, UserStatusKind},
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
    #[oai(path = "/api/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(
        &self,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
        search: Query<Option<String>>,
        status: Query<Option<UserStatusKind>>,
        #[oai(name = "sortBy")] sort_by: Query<Option<UserSortKind>>,
        #[oai(name = "sortOrder")] sort_order: Query<Option<SortOrderKind>>,
    ) -> PoemResult<Json<PaginatedUsersDto>> {
        let filter = UserFilter {
            search: search.0,
            status: status.0.map(Into::into),
        };
        let query = UserListQuery::new(filter, limit.0, offset.0)
            .sorted_by(sort_by.0.map(Into::into), sort_order.0.map(Into::into));

        let page = self.state.list_users_usecase.execute(query).await?;

        Ok(Json(map_user_page(&page)))
    }

    #[oai(path = "/api/users/count", method = "get", tag = EndpointsTags::Users)]
    pub async fn count_users(
        &self,
        search: Query<Option<String>>,
        status: Query<Option<UserStatusKind>>,
    ) -> PoemResult<Json<CountResponseDto>> {
        let filter = UserFilter {
            search: search.0,
            status: status.0.map(Into::into),
        };
        let count = self.state.count_users_usecase.execute(filter).await?;

        Ok(Json(CountResponseDto { count }))
    }

    #[oai(path = "/api/users/check-email", method = "get", tag = EndpointsTags::Users)]
    pub async fn check_email(
        &self,
        email: Query<String>,
        #[oai(name = "excludeId")] exclude_id: Query<Option<Uuid>>,
    ) -> PoemResult<Json<CheckEmailResponseDto>> {
        let result = self
            .state
            .check_email_usecase
            .execute(&email.0, exclude_id.0)
            .await?;

        Ok(Json(CheckEmailResponseDto {
            email: result.email,
            available: result.available,
        }))
    }

    #[oai(path = "/api/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<Uuid>) -> PoemResult<Json<UserDto>> {
        let user = self
            .state
            .get_user_usecase
            .execute(id.0)
            .await?
            .ok_or_else(|| HttpError::not_found(format!("user {} not found", id.0)))?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/api/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        request: Json<CreateUserRequestDto>,
    ) -> PoemResult<CreateUserResponse> {
        let user = self
            .state
            .create_user_usecase
            .execute(map_create_user(request.0))
            .await?;

        Ok(CreateUserResponse::Created(Json(map_user(&user))))
    }

    #[oai(path = "/api/users/:id", method = "patch", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<Uuid>,
        request: Json<UpdateUserRequestDto>,
    ) -> PoemResult<Json<UserDto>> {
        let user = self
            .state
            .update_user_usecase
            .execute(id.0, map_update_user(request.0))
            .await?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/api/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<Uuid>) -> PoemResult<Json<DeleteUserResponseDto>> {
        let user = self.state.delete_user_usecase.execute(id.0).await?;

        Ok(Json(DeleteUserResponseDto {
            success: true,
            id: user.id,
        }))
    }
}
