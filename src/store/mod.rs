use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::AppError;

/// A registered user row. Immutable once written, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub age: i32,
}

/// Persistence seam for the users table. Implemented by [`PgUserStore`] in
/// production and by in-memory doubles in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Cheap connectivity probe used by the readiness and health checks.
    async fn ping(&self) -> Result<(), AppError>;

    /// Idempotent create-if-absent for the users table.
    async fn ensure_table(&self) -> Result<(), AppError>;

    /// Inserts a row and returns the generated id.
    async fn insert_user(&self, name: &str, surname: &str, age: i32) -> Result<i32, AppError>;

    /// The most recent rows by descending id.
    async fn recent_users(&self, limit: i64) -> Result<Vec<UserRecord>, AppError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn ensure_table(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                name TEXT,
                surname TEXT,
                age INTEGER
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_user(&self, name: &str, surname: &str, age: i32) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO users (name, surname, age) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(surname)
        .bind(age)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn recent_users(&self, limit: i64) -> Result<Vec<UserRecord>, AppError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, surname, age FROM users ORDER BY id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
