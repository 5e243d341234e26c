//! MySQL implementation of the ProfileRepository trait.
//!
//! Profiles live in a single table with a `role` discriminant and nullable
//! role-specific columns; the mapper folds each row back into the tagged
//! payload.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::profile::{Profile, ProfileDetails, RiderVerificationStatus};
use mr_core::errors::DomainError;
use mr_core::repositories::ProfileRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, account_id, role,
           preferred_payment_method, home_address, preferred_language, emergency_contact,
           license_number, verification_status, is_available,
           current_latitude, current_longitude, average_rating, total_rides,
           created_at, updated_at
    FROM profiles
"#;

/// MySQL-backed profile repository
pub struct MySqlProfileRepository {
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn get<'r, T>(row: &'r sqlx::mysql::MySqlRow, column: &str) -> Result<T, DomainError>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
    {
        row.try_get(column)
            .map_err(|e| DomainError::Database(format!("Failed to get {}: {}", column, e)))
    }

    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<Profile, DomainError> {
        let id: String = Self::get(row, "id")?;
        let account_id: String = Self::get(row, "account_id")?;
        let role: String = Self::get(row, "role")?;

        let details = match role.as_str() {
            "passenger" => ProfileDetails::Passenger {
                preferred_payment_method: Self::get::<Option<String>>(
                    row,
                    "preferred_payment_method",
                )?
                .unwrap_or_default(),
                home_address: Self::get::<Option<String>>(row, "home_address")?
                    .unwrap_or_default(),
                preferred_language: Self::get::<Option<String>>(row, "preferred_language")?
                    .unwrap_or_default(),
                emergency_contact: Self::get::<Option<String>>(row, "emergency_contact")?
                    .unwrap_or_default(),
            },
            "rider" => {
                let status_str: Option<String> = Self::get(row, "verification_status")?;
                let status_str = status_str.unwrap_or_else(|| "pending".to_string());
                let verification_status =
                    RiderVerificationStatus::parse(&status_str).ok_or_else(|| {
                        DomainError::Database(format!(
                            "Unknown verification_status: {}",
                            status_str
                        ))
                    })?;
                ProfileDetails::Rider {
                    license_number: Self::get::<Option<String>>(row, "license_number")?
                        .unwrap_or_default(),
                    verification_status,
                    is_available: Self::get::<Option<bool>>(row, "is_available")?
                        .unwrap_or(false),
                    current_latitude: Self::get(row, "current_latitude")?,
                    current_longitude: Self::get(row, "current_longitude")?,
                    average_rating: Self::get::<Option<f64>>(row, "average_rating")?
                        .unwrap_or(0.0),
                    total_rides: Self::get::<Option<u32>>(row, "total_rides")?.unwrap_or(0),
                }
            }
            other => {
                return Err(DomainError::Database(format!("Unknown role: {}", other)));
            }
        };

        Ok(Profile {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            account_id: Uuid::parse_str(&account_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            details,
            created_at: Self::get::<DateTime<Utc>>(row, "created_at")?,
            updated_at: Self::get::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    /// Flatten the tagged payload into the table's nullable columns
    fn bind_details(
        profile: &Profile,
    ) -> (
        Option<&String>,
        Option<&String>,
        Option<&String>,
        Option<&String>,
        Option<&String>,
        Option<&'static str>,
        Option<bool>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<u32>,
    ) {
        match &profile.details {
            ProfileDetails::Passenger {
                preferred_payment_method,
                home_address,
                preferred_language,
                emergency_contact,
            } => (
                Some(preferred_payment_method),
                Some(home_address),
                Some(preferred_language),
                Some(emergency_contact),
                None,
                None,
                None,
                None,
                None,
                None,
                None,
            ),
            ProfileDetails::Rider {
                license_number,
                verification_status,
                is_available,
                current_latitude,
                current_longitude,
                average_rating,
                total_rides,
            } => (
                None,
                None,
                None,
                None,
                Some(license_number),
                Some(verification_status.as_str()),
                Some(*is_available),
                *current_latitude,
                *current_longitude,
                Some(*average_rating),
                Some(*total_rides),
            ),
        }
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);
        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Profile>, DomainError> {
        let query = format!("{} WHERE account_id = ? LIMIT 1", SELECT_COLUMNS);
        let result = sqlx::query(&query)
            .bind(account_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        let query = r#"
            INSERT INTO profiles (
                id, account_id, role,
                preferred_payment_method, home_address, preferred_language, emergency_contact,
                license_number, verification_status, is_available,
                current_latitude, current_longitude, average_rating, total_rides,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let (payment, address, language, emergency, license, status, available, lat, lng, rating, rides) =
            Self::bind_details(&profile);

        sqlx::query(query)
            .bind(profile.id.to_string())
            .bind(profile.account_id.to_string())
            .bind(profile.role().as_str())
            .bind(payment)
            .bind(address)
            .bind(language)
            .bind(emergency)
            .bind(license)
            .bind(status)
            .bind(available)
            .bind(lat)
            .bind(lng)
            .bind(rating)
            .bind(rides)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create profile: {}", e)))?;

        Ok(profile)
    }

    async fn update(&self, profile: Profile) -> Result<Profile, DomainError> {
        let query = r#"
            UPDATE profiles SET
                preferred_payment_method = ?,
                home_address = ?,
                preferred_language = ?,
                emergency_contact = ?,
                license_number = ?,
                verification_status = ?,
                is_available = ?,
                current_latitude = ?,
                current_longitude = ?,
                average_rating = ?,
                total_rides = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let (payment, address, language, emergency, license, status, available, lat, lng, rating, rides) =
            Self::bind_details(&profile);

        let result = sqlx::query(query)
            .bind(payment)
            .bind(address)
            .bind(language)
            .bind(emergency)
            .bind(license)
            .bind(status)
            .bind(available)
            .bind(lat)
            .bind(lng)
            .bind(rating)
            .bind(rides)
            .bind(Utc::now())
            .bind(profile.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("profile"));
        }

        let mut updated = profile;
        updated.updated_at = Utc::now();
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete profile: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<Profile>, DomainError> {
        let query = format!("{} ORDER BY created_at", SELECT_COLUMNS);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_profile).collect()
    }

    async fn find_available_riders(&self) -> Result<Vec<Profile>, DomainError> {
        let query = format!(
            "{} WHERE role = 'rider' AND is_available = TRUE AND verification_status = 'approved'",
            SELECT_COLUMNS
        );
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_profile).collect()
    }
}
