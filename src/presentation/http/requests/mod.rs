use poem_openapi::{
    Object,
    types::{Email, MaybeUndefined},
};

use crate::presentation::models::{PositionKind, UserStatusKind};

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateUserRequestDto {
    #[oai(validator(min_length = 1, max_length = 255))]
    pub name: String,
    pub email: Email,
    pub image: Option<String>,
    pub status: Option<UserStatusKind>,
    pub email_verified: Option<bool>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UpdateUserRequestDto {
    #[oai(validator(min_length = 1, max_length = 255))]
    pub name: Option<String>,
    pub email: Option<Email>,
    /// `null` removes the image; omitting the field keeps it.
    pub image: MaybeUndefined<String>,
    pub status: Option<UserStatusKind>,
    pub email_verified: Option<bool>,
}

#[derive(Object, Debug)]
pub struct PositionRequestDto {
    pub position: PositionKind,
}

#[derive(Object, Debug)]
pub struct EnabledRequestDto {
    pub enabled: bool,
}

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct PluginMetadataDto {
    #[oai(validator(min_length = 1))]
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
}

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct PluginPageDto {
    #[oai(validator(min_length = 1))]
    pub id: String,
    pub title: String,
    pub icon: Option<String>,
    #[oai(default)]
    pub children: Vec<PluginPageDto>,
}

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct PageGroupDto {
    #[oai(validator(min_length = 1))]
    pub id: String,
    pub title: String,
    #[oai(default)]
    pub pages: Vec<PluginPageDto>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct RegisterPluginRequestDto {
    #[oai(validator(min_length = 1, max_length = 128))]
    pub id: String,
    pub metadata: PluginMetadataDto,
    #[oai(default)]
    pub groups: Vec<PageGroupDto>,
    /// Defaults to `true`.
    pub enabled: Option<bool>,
}
