//! MySQL implementation of the DistrictRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::district::District;
use mr_core::errors::DomainError;
use mr_core::repositories::DistrictRepository;

/// MySQL-backed district repository
pub struct MySqlDistrictRepository {
    pool: MySqlPool,
}

impl MySqlDistrictRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_district(row: &sqlx::mysql::MySqlRow) -> Result<District, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;

        Ok(District {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            code: row
                .try_get("code")
                .map_err(|e| DomainError::Database(format!("Failed to get code: {}", e)))?,
            province: row
                .try_get("province")
                .map_err(|e| DomainError::Database(format!("Failed to get province: {}", e)))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| DomainError::Database(format!("Failed to get is_active: {}", e)))?,
        })
    }
}

#[async_trait]
impl DistrictRepository for MySqlDistrictRepository {
    async fn list_active(&self) -> Result<Vec<District>, DomainError> {
        let query = r#"
            SELECT id, name, code, province, is_active
            FROM districts
            WHERE is_active = TRUE
            ORDER BY name
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_district).collect()
    }
}
