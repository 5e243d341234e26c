//! MySQL implementation of the VerificationCodeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::verification_code::{Channel, VerificationCode};
use mr_core::errors::DomainError;
use mr_core::repositories::VerificationCodeRepository;

/// MySQL-backed verification code repository
pub struct MySqlVerificationCodeRepository {
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<VerificationCode, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| DomainError::Database(format!("Failed to get account_id: {}", e)))?;
        let channel_str: String = row
            .try_get("channel")
            .map_err(|e| DomainError::Database(format!("Failed to get channel: {}", e)))?;
        let channel = Channel::parse(&channel_str)
            .ok_or_else(|| DomainError::Database(format!("Unknown channel: {}", channel_str)))?;

        Ok(VerificationCode {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            channel,
            code: row
                .try_get("code")
                .map_err(|e| DomainError::Database(format!("Failed to get code: {}", e)))?,
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
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn create(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let query = r#"
            INSERT INTO verification_codes (id, account_id, channel, code, is_used, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(code.account_id.to_string())
            .bind(code.channel.as_str())
            .bind(&code.code)
            .bind(code.is_used)
            .bind(code.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create code: {}", e)))?;

        Ok(code)
    }

    async fn find_latest_unused(
        &self,
        account_id: Uuid,
        channel: Channel,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT id, account_id, channel, code, is_used, created_at
            FROM verification_codes
            WHERE account_id = ? AND channel = ? AND is_used = FALSE
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(account_id.to_string())
            .bind(channel.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }
}
