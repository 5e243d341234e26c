//! MySQL implementation of the ResetTokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::reset_token::ResetToken;
use mr_core::errors::DomainError;
use mr_core::repositories::ResetTokenRepository;

/// MySQL-backed reset token repository
pub struct MySqlResetTokenRepository {
    pool: MySqlPool,
}

impl MySqlResetTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<ResetToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| DomainError::Database(format!("Failed to get account_id: {}", e)))?;

        Ok(ResetToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            token: row
                .try_get("token")
                .map_err(|e| DomainError::Database(format!("Failed to get token: {}", e)))?,
            is_used: row
                .try_get("is_used")
                .map_err(|e| DomainError::Database(format!("Failed to get is_used: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl ResetTokenRepository for MySqlResetTokenRepository {
    async fn create(&self, token: ResetToken) -> Result<ResetToken, DomainError> {
        let query = r#"
            INSERT INTO reset_tokens (id, account_id, token, is_used, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.account_id.to_string())
            .bind(&token.token)
            .bind(token.is_used)
            .bind(token.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create token: {}", e)))?;

        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ResetToken>, DomainError> {
        let query = r#"
            SELECT id, account_id, token, is_used, created_at
            FROM reset_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }
}
