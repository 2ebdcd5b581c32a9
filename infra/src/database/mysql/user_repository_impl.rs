//! MySQL implementation of the UserRepository trait.
//!
//! The one-time code lives in two nullable columns (`otp`, `otp_expires_at`)
//! that are always written together by a single targeted UPDATE.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lf_core::domain::entities::user::{OneTimeCode, User};
use lf_core::errors::{AuthError, DomainError};
use lf_core::repositories::UserRepository;

use super::{db_error, parse_uuid};

const USER_COLUMNS: &str = "id, name, email, phone_number, is_verified, otp, otp_expires_at, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let get = db_error("Failed to read user row");

        let id: String = row.try_get("id").map_err(&get)?;
        let otp: Option<String> = row.try_get("otp").map_err(&get)?;
        let otp_expires_at: Option<DateTime<Utc>> = row.try_get("otp_expires_at").map_err(&get)?;

        Ok(User {
            id: parse_uuid(&id, "users.id")?,
            name: row.try_get("name").map_err(&get)?,
            email: row.try_get("email").map_err(&get)?,
            phone_number: row.try_get("phone_number").map_err(&get)?,
            is_verified: row.try_get("is_verified").map_err(&get)?,
            otp: OneTimeCode::from_columns(otp, otp_expires_at),
            created_at: row.try_get("created_at").map_err(&get)?,
            updated_at: row.try_get("updated_at").map_err(&get)?,
        })
    }

    /// Fail with NotFound when an UPDATE matched no row
    fn require_row(rows_affected: u64) -> Result<(), DomainError> {
        if rows_affected == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by email"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, name, email, phone_number, is_verified,
                otp, otp_expires_at, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone_number)
            .bind(user.is_verified)
            .bind(user.otp.as_ref().map(|o| o.code.clone()))
            .bind(user.otp.as_ref().map(|o| o.expires_at))
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AuthError::UserAlreadyExists.into())
            }
            Err(e) => Err(db_error("Failed to create user")(e)),
        }
    }

    async fn set_otp(&self, user_id: Uuid, otp: OneTimeCode) -> Result<(), DomainError> {
        let query = r#"
            UPDATE users
            SET otp = ?, otp_expires_at = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&otp.code)
            .bind(otp.expires_at)
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to store one-time code"))?;

        Self::require_row(result.rows_affected())
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<(), DomainError> {
        let query = r#"
            UPDATE users
            SET is_verified = TRUE, otp = NULL, otp_expires_at = NULL, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to mark user verified"))?;

        Self::require_row(result.rows_affected())
    }
}
