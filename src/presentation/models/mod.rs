use poem_openapi::Enum;

use crate::domain::{
    devtools::{DevToolAction, DevToolMode, DevToolPosition, Theme},
    models::{ComponentStatus, OverallStatus, SortOrder, UserSortField, UserStatus},
};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum UserStatusKind {
    #[oai(rename = "active")]
    Active,
    #[oai(rename = "inactive")]
    Inactive,
    #[oai(rename = "suspended")]
    Suspended,
}

impl From<UserStatusKind> for UserStatus {
    fn from(value: UserStatusKind) -> Self {
        match value {
            UserStatusKind::Active => UserStatus::Active,
            UserStatusKind::Inactive => UserStatus::Inactive,
            UserStatusKind::Suspended => UserStatus::Suspended,
        }
    }
}

impl From<UserStatus> for UserStatusKind {
    fn from(value: UserStatus) -> Self {
        match value {
            UserStatus::Active => UserStatusKind::Active,
            UserStatus::Inactive => UserStatusKind::Inactive,
            UserStatus::Suspended => UserStatusKind::Suspended,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum UserSortKind {
    #[oai(rename = "name")]
    Name,
    #[oai(rename = "email")]
    Email,
    #[oai(rename = "status")]
    Status,
    #[oai(rename = "createdAt")]
    CreatedAt,
    #[oai(rename = "updatedAt")]
    UpdatedAt,
}

impl From<UserSortKind> for UserSortField {
    fn from(value: UserSortKind) -> Self {
        match value {
            UserSortKind::Name => UserSortField::Name,
            UserSortKind::Email => UserSortField::Email,
            UserSortKind::Status => UserSortField::Status,
            UserSortKind::CreatedAt => UserSortField::CreatedAt,
            UserSortKind::UpdatedAt => UserSortField::UpdatedAt,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortOrderKind {
    #[oai(rename = "asc")]
    Asc,
    #[oai(rename = "desc")]
    Desc,
}

impl From<SortOrderKind> for SortOrder {
    fn from(value: SortOrderKind) -> Self {
        match value {
            SortOrderKind::Asc => SortOrder::Asc,
            SortOrderKind::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum HealthStatusKind {
    #[oai(rename = "ok")]
    Ok,
    #[oai(rename = "degraded")]
    Degraded,
}

impl From<OverallStatus> for HealthStatusKind {
    fn from(value: OverallStatus) -> Self {
        match value {
            OverallStatus::Ok => HealthStatusKind::Ok,
            OverallStatus::Degraded => HealthStatusKind::Degraded,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ComponentStatusKind {
    #[oai(rename = "up")]
    Up,
    #[oai(rename = "down")]
    Down,
}

impl From<ComponentStatus> for ComponentStatusKind {
    fn from(value: ComponentStatus) -> Self {
        match value {
            ComponentStatus::Up => ComponentStatusKind::Up,
            ComponentStatus::Down => ComponentStatusKind::Down,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DevToolModeKind {
    #[oai(rename = "NONE")]
    None,
    #[oai(rename = "NORMAL")]
    Normal,
    #[oai(rename = "EXPANDED")]
    Expanded,
}

impl From<DevToolMode> for DevToolModeKind {
    fn from(value: DevToolMode) -> Self {
        match value {
            DevToolMode::None => DevToolModeKind::None,
            DevToolMode::Normal => DevToolModeKind::Normal,
            DevToolMode::Expanded => DevToolModeKind::Expanded,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DevToolActionKind {
    #[oai(rename = "show")]
    Show,
    #[oai(rename = "expand")]
    Expand,
    #[oai(rename = "close")]
    Close,
    #[oai(rename = "toggle")]
    Toggle,
    #[oai(rename = "cycle")]
    Cycle,
}

impl From<DevToolActionKind> for DevToolAction {
    fn from(value: DevToolActionKind) -> Self {
        match value {
            DevToolActionKind::Show => DevToolAction::Show,
            DevToolActionKind::Expand => DevToolAction::Expand,
            DevToolActionKind::Close => DevToolAction::Close,
            DevToolActionKind::Toggle => DevToolAction::Toggle,
            DevToolActionKind::Cycle => DevToolAction::Cycle,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum PositionKind {
    #[oai(rename = "bottom-right")]
    BottomRight,
    #[oai(rename = "bottom-left")]
    BottomLeft,
    #[oai(rename = "top-right")]
    TopRight,
    #[oai(rename = "top-left")]
    TopLeft,
}

impl From<PositionKind> for DevToolPosition {
    fn from(value: PositionKind) -> Self {
        match value {
            PositionKind::BottomRight => DevToolPosition::BottomRight,
            PositionKind::BottomLeft => DevToolPosition::BottomLeft,
            PositionKind::TopRight => DevToolPosition::TopRight,
            PositionKind::TopLeft => DevToolPosition::TopLeft,
        }
    }
}

impl From<DevToolPosition> for PositionKind {
    fn from(value: DevToolPosition) -> Self {
        match value {
            DevToolPosition::BottomRight => PositionKind::BottomRight,
            DevToolPosition::BottomLeft => PositionKind::BottomLeft,
            DevToolPosition::TopRight => PositionKind::TopRight,
            DevToolPosition::TopLeft => PositionKind::TopLeft,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ThemeKind {
    #[oai(rename = "system")]
    System,
    #[oai(rename = "light")]
    Light,
    #[oai(rename = "dark")]
    Dark,
}

impl From<ThemeKind> for Theme {
    fn from(value: ThemeKind) -> Self {
        match value {
            ThemeKind::System => Theme::System,
            ThemeKind::Light => Theme::Light,
            ThemeKind::Dark => Theme::Dark,
        }
    }
}

impl From<Theme> for ThemeKind {
    fn from(value: Theme) -> Self {
        match value {
            Theme::System => ThemeKind::System,
            Theme::Light => ThemeKind::Light,
            Theme::Dark => ThemeKind::Dark,
        }
    }
}
