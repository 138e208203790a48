pub mod auth;
pub mod health;
pub mod user;

pub use auth::{AuthRequest, AuthResponse};
pub use health::{
    ComponentStatus, DatabaseCheck, DetailedHealth, HealthSnapshot, MemoryUsage, OverallStatus,
    Readiness,
};
pub use user::{
    SortOrder, User, UserFilter, UserListQuery, UserPage, UserSortField, UserStatus,
    normalize_email,
};
