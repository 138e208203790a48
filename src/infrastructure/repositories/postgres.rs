use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres, QueryBuilder, postgres::PgPoolOptions};
use uuid::Uuid;

use crate::domain::{
    errors::UniqueViolation,
    models::{SortOrder, User, UserFilter, UserListQuery, UserSortField, UserStatus},
    repositories::{DatabaseProbe, UserRepository},
};

pub type PgPool = Pool<Postgres>;

const USER_COLUMNS: &str = "id, name, email, image, status, email_verified, created_at, updated_at";

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list(&self, query: &UserListQuery) -> anyhow::Result<Vec<User>> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {USER_COLUMNS} FROM users"));
        push_filter(&mut builder, &query.filter);
        builder
            .push(" ORDER BY ")
            .push(sort_column(query.sort_by))
            .push(" ")
            .push(sort_direction(query.sort_order))
            .push(", id ASC LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(query.offset));

        let rows = builder
            .build_query_as::<UserRecord>()
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(User::try_from).collect()
    }

    async fn count(&self, filter: &UserFilter) -> anyhow::Result<u64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM users");
        push_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total.max(0) as u64)
    }

    async fn find_by_id(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        record.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        record.map(User::try_from).transpose()
    }

    async fn insert(&self, user: &User) -> anyhow::Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            INSERT INTO users (id, name, email, image, status, email_verified, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.image)
        .bind(user.status.as_str())
        .bind(user.email_verified)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;
        User::try_from(record)
    }

    async fn update(&self, user: &User) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            UPDATE users
            SET name = $2,
                email = $3,
                image = $4,
                status = $5,
                email_verified = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.image)
        .bind(user.status.as_str())
        .bind(user.email_verified)
        .bind(user.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(write_error)?;
        record.map(User::try_from).transpose()
    }

    async fn delete(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        record.map(User::try_from).transpose()
    }
}

#[derive(Clone)]
pub struct PostgresDatabaseProbe {
    pool: PgPool,
}

impl PostgresDatabaseProbe {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl DatabaseProbe for PostgresDatabaseProbe {
    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Surfaces unique violations as [`UniqueViolation`] so callers can tell a
/// conflict from other database failures.
fn write_error(err: sqlx::Error) -> anyhow::Error {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return UniqueViolation {
                constraint: db_err.constraint().unwrap_or("users").to_string(),
            }
            .into();
        }
    }
    err.into()
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &UserFilter) {
    let mut separator = " WHERE ";

    if let Some(status) = filter.status {
        builder
            .push(separator)
            .push("status = ")
            .push_bind(status.as_str());
        separator = " AND ";
    }

    if let Some(term) = filter.search_term() {
        let pattern = format!("%{}%", escape_like(term));
        builder
            .push(separator)
            .push("(name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR email ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn sort_column(field: UserSortField) -> &'static str {
    match field {
        UserSortField::Name => "name",
        UserSortField::Email => "email",
        UserSortField::Status => "status",
        UserSortField::CreatedAt => "created_at",
        UserSortField::UpdatedAt => "updated_at",
    }
}

fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: Uuid,
    name: String,
    email: String,
    image: Option<String>,
    status: String,
    email_verified: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = anyhow::Error;

    fn try_from(value: UserRecord) -> Result<Self, Self::Error> {
        let status: UserStatus = value.status.parse()?;
        Ok(Self {
            id: value.id,
            name: value.name,
            email: value.email,
            image: value.image,
            status,
            email_verified: value.email_verified,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}
