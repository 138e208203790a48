use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

use crate::presentation::{
    http::requests::{PageGroupDto, PluginMetadataDto},
    models::{
        ComponentStatusKind, DevToolModeKind, HealthStatusKind, PositionKind, ThemeKind,
        UserStatusKind,
    },
};

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub status: UserStatusKind,
    pub email_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

#[derive(Object)]
pub struct DeleteUserResponseDto {
    pub success: bool,
    pub id: Uuid,
}

#[derive(Object)]
pub struct CheckEmailResponseDto {
    pub email: String,
    pub available: bool,
}

#[derive(Object)]
pub struct CountResponseDto {
    pub count: u64,
}

#[derive(ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct LivenessDto {
    pub status: String,
    pub uptime_seconds: u64,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct DatabaseCheckDto {
    pub status: ComponentStatusKind,
    pub latency_ms: u64,
    pub error: Option<String>,
}

#[derive(Object)]
pub struct ReadinessDto {
    pub ready: bool,
    pub database: DatabaseCheckDto,
}

#[derive(ApiResponse)]
pub enum ReadinessResponse {
    #[oai(status = 200)]
    Ready(Json<ReadinessDto>),
    #[oai(status = 503)]
    NotReady(Json<ReadinessDto>),
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct MemoryUsageDto {
    pub resident_bytes: u64,
    pub virtual_bytes: u64,
    pub system_total_bytes: u64,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct DetailedHealthDto {
    pub status: HealthStatusKind,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub memory: MemoryUsageDto,
    pub database: DatabaseCheckDto,
}

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct DevToolSettingsDto {
    pub theme: ThemeKind,
    #[oai(default)]
    pub open_on_start: bool,
}

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct SelectedPageDto {
    #[oai(validator(min_length = 1))]
    pub plugin_id: String,
    #[oai(validator(min_length = 1))]
    pub page_id: String,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct DevToolStateDto {
    pub mode: DevToolModeKind,
    pub position: PositionKind,
    pub settings: DevToolSettingsDto,
    pub pinned_plugins: Vec<String>,
    pub active_plugins: Vec<String>,
    pub selected_page: Option<SelectedPageDto>,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct PluginDto {
    pub id: String,
    pub metadata: PluginMetadataDto,
    pub groups: Vec<PageGroupDto>,
    pub enabled: bool,
    pub active: bool,
    pub pinned: bool,
}

#[derive(ApiResponse)]
pub enum RegisterPluginResponse {
    #[oai(status = 201)]
    Created(Json<PluginDto>),
}
