use poem_openapi::types::MaybeUndefined;

use crate::{
    application::{
        services::devtools::{DevToolSnapshot, PluginView},
        usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    },
    domain::{
        devtools::{
            DevToolSettings, PageGroup, PluginDescriptor, PluginMetadata, PluginPage, SelectedPage,
        },
        models::{DatabaseCheck, DetailedHealth, HealthSnapshot, User, UserPage},
    },
    presentation::http::{
        requests::{
            CreateUserRequestDto, PageGroupDto, PluginMetadataDto, PluginPageDto,
            RegisterPluginRequestDto, UpdateUserRequestDto,
        },
        responses::{
            DatabaseCheckDto, DetailedHealthDto, DevToolSettingsDto, DevToolStateDto, HealthDto,
            MemoryUsageDto, PaginatedUsersDto, PluginDto, SelectedPageDto, UserDto,
        },
    },
};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        image: user.image.clone(),
        status: user.status.into(),
        email_verified: user.email_verified,
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}

pub fn map_user_page(page: &UserPage) -> PaginatedUsersDto {
    PaginatedUsersDto {
        users: page.users.iter().map(map_user).collect(),
        total: page.total,
        limit: page.limit,
        offset: page.offset,
        has_more: page.has_more,
    }
}

pub fn map_create_user(dto: CreateUserRequestDto) -> CreateUserRequest {
    CreateUserRequest {
        name: dto.name,
        email: dto.email.0,
        image: dto.image,
        status: dto.status.map(Into::into),
        email_verified: dto.email_verified,
    }
}

pub fn map_update_user(dto: UpdateUserRequestDto) -> UpdateUserRequest {
    UpdateUserRequest {
        name: dto.name,
        email: dto.email.map(|email| email.0),
        image: match dto.image {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(image) => Some(Some(image)),
        },
        status: dto.status.map(Into::into),
        email_verified: dto.email_verified,
    }
}

pub fn map_health(snapshot: &HealthSnapshot) -> HealthDto {
    HealthDto {
        status: "ok".to_string(),
        timestamp: snapshot.timestamp.to_rfc3339(),
        uptime_seconds: snapshot.uptime_seconds,
    }
}

pub fn map_database_check(check: &DatabaseCheck) -> DatabaseCheckDto {
    DatabaseCheckDto {
        status: check.status.into(),
        latency_ms: check.latency_ms,
        error: check.error.clone(),
    }
}

pub fn map_detailed_health(health: &DetailedHealth) -> DetailedHealthDto {
    DetailedHealthDto {
        status: health.status.into(),
        timestamp: health.timestamp.to_rfc3339(),
        uptime_seconds: health.uptime_seconds,
        version: health.version.to_string(),
        memory: MemoryUsageDto {
            resident_bytes: health.memory.resident_bytes,
            virtual_bytes: health.memory.virtual_bytes,
            system_total_bytes: health.memory.system_total_bytes,
        },
        database: map_database_check(&health.database),
    }
}

pub fn map_devtool_state(snapshot: &DevToolSnapshot) -> DevToolStateDto {
    DevToolStateDto {
        mode: snapshot.mode.into(),
        position: snapshot.position.into(),
        settings: map_settings(&snapshot.settings),
        pinned_plugins: snapshot.pinned_plugins.clone(),
        active_plugins: snapshot.active_plugins.clone(),
        selected_page: snapshot.selected_page.as_ref().map(map_selected_page),
    }
}

pub fn map_settings(settings: &DevToolSettings) -> DevToolSettingsDto {
    DevToolSettingsDto {
        theme: settings.theme.into(),
        open_on_start: settings.open_on_start,
    }
}

pub fn map_settings_request(dto: &DevToolSettingsDto) -> DevToolSettings {
    DevToolSettings {
        theme: dto.theme.into(),
        open_on_start: dto.open_on_start,
    }
}

fn map_selected_page(selected: &SelectedPage) -> SelectedPageDto {
    SelectedPageDto {
        plugin_id: selected.plugin_id.clone(),
        page_id: selected.page_id.clone(),
    }
}

pub fn map_plugin(view: &PluginView) -> PluginDto {
    let descriptor = &view.descriptor;
    PluginDto {
        id: descriptor.id.clone(),
        metadata: PluginMetadataDto {
            name: descriptor.metadata.name.clone(),
            description: descriptor.metadata.description.clone(),
            icon: descriptor.metadata.icon.clone(),
            version: descriptor.metadata.version.clone(),
            author: descriptor.metadata.author.clone(),
        },
        groups: descriptor
            .groups
            .iter()
            .map(|group| PageGroupDto {
                id: group.id.clone(),
                title: group.title.clone(),
                pages: group.pages.iter().map(map_page).collect(),
            })
            .collect(),
        enabled: descriptor.enabled,
        active: view.active,
        pinned: view.pinned,
    }
}

fn map_page(page: &PluginPage) -> PluginPageDto {
    PluginPageDto {
        id: page.id.clone(),
        title: page.title.clone(),
        icon: page.icon.clone(),
        children: page.children.iter().map(map_page).collect(),
    }
}

pub fn map_register_plugin(dto: RegisterPluginRequestDto) -> PluginDescriptor {
    PluginDescriptor {
        id: dto.id,
        metadata: PluginMetadata {
            name: dto.metadata.name,
            description: dto.metadata.description,
            icon: dto.metadata.icon,
            version: dto.metadata.version,
            author: dto.metadata.author,
        },
        groups: dto
            .groups
            .into_iter()
            .map(|group| PageGroup {
                id: group.id,
                title: group.title,
                pages: group.pages.into_iter().map(map_page_request).collect(),
            })
            .collect(),
        enabled: dto.enabled.unwrap_or(true),
    }
}

fn map_page_request(dto: PluginPageDto) -> PluginPage {
    PluginPage {
        id: dto.id,
        title: dto.title,
        icon: dto.icon,
        children: dto.children.into_iter().map(map_page_request).collect(),
    }
}
