use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub status: UserStatus,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl FromStr for UserStatus {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            other => Err(anyhow::anyhow!("unknown user status {other}")),
        }
    }
}

/// Lower-cases and trims an address so uniqueness checks are not defeated by
/// casing or stray whitespace.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: Option<String>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    /// Blank search terms are treated as no search at all.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn matches(&self, user: &User) -> bool {
        if let Some(status) = self.status {
            if user.status != status {
                return false;
            }
        }

        match self.search_term() {
            Some(term) => {
                let term = term.to_lowercase();
                user.name.to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term)
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserSortField {
    Name,
    Email,
    Status,
    #[default]
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub filter: UserFilter,
    pub sort_by: UserSortField,
    pub sort_order: SortOrder,
    pub limit: u32,
    pub offset: u32,
}

impl UserListQuery {
    pub fn new(filter: UserFilter, limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            filter,
            sort_by: UserSortField::default(),
            sort_order: SortOrder::default(),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }

    pub fn sorted_by(mut self, field: Option<UserSortField>, order: Option<SortOrder>) -> Self {
        self.sort_by = field.unwrap_or_default();
        self.sort_order = order.unwrap_or_default();
        self
    }
}

#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

impl UserPage {
    pub fn new(users: Vec<User>, total: u64, limit: u32, offset: u32) -> Self {
        Self {
            users,
            total,
            limit,
            offset,
            has_more: u64::from(offset) + u64::from(limit) < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, status: UserStatus) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            image: None,
            status,
            email_verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn has_more_only_while_rows_remain_past_the_page() {
        assert!(UserPage::new(vec![], 25, 10, 10).has_more);
        assert!(!UserPage::new(vec![], 20, 10, 10).has_more);
        assert!(!UserPage::new(vec![], 5, 10, 0).has_more);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(UserListQuery::new(UserFilter::default(), Some(0), None).limit, 1);
        assert_eq!(UserListQuery::new(UserFilter::default(), Some(500), None).limit, MAX_PAGE_LIMIT);
        assert_eq!(UserListQuery::new(UserFilter::default(), None, None).limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn filter_searches_name_and_email_case_insensitively() {
        let ada = user("Ada Lovelace", "ada@example.com", UserStatus::Active);
        let filter = UserFilter {
            search: Some("LOVE".to_string()),
            status: None,
        };
        assert!(filter.matches(&ada));

        let filter = UserFilter {
            search: Some("EXAMPLE.COM".to_string()),
            status: Some(UserStatus::Suspended),
        };
        assert!(!filter.matches(&ada));

        let blank = UserFilter {
            search: Some("   ".to_string()),
            status: None,
        };
        assert!(blank.matches(&ada));
    }

    #[test]
    fn status_parses_its_own_text() {
        for status in [UserStatus::Active, UserStatus::Inactive, UserStatus::Suspended] {
            assert_eq!(status.as_str().parse::<UserStatus>().unwrap(), status);
        }
        assert!("Active".parse::<UserStatus>().is_err());
    }

    #[test]
    fn normalizes_email() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }
}
