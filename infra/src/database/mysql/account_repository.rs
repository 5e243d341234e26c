//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mr_core::domain::entities::account::{Account, UserType};
use mr_core::errors::DomainError;
use mr_core::repositories::AccountRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, email, phone_number, password_hash, user_type,
           first_name, last_name, phone_verified, email_verified,
           is_active, is_account_locked, account_locked_until,
           created_at, updated_at
    FROM accounts
"#;

/// MySQL-backed account repository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let user_type_str: String = row
            .try_get("user_type")
            .map_err(|e| DomainError::Database(format!("Failed to get user_type: {}", e)))?;
        let user_type = UserType::parse(&user_type_str)
            .ok_or_else(|| DomainError::Database(format!("Unknown user_type: {}", user_type_str)))?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::Database(format!("Failed to get phone_number: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database(format!("Failed to get password_hash: {}", e)))?,
            user_type,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::Database(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::Database(format!("Failed to get last_name: {}", e)))?,
            phone_verified: row
                .try_get("phone_verified")
                .map_err(|e| DomainError::Database(format!("Failed to get phone_verified: {}", e)))?,
            email_verified: row
                .try_get("email_verified")
                .map_err(|e| DomainError::Database(format!("Failed to get email_verified: {}", e)))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| DomainError::Database(format!("Failed to get is_active: {}", e)))?,
            is_account_locked: row.try_get("is_account_locked").map_err(|e| {
                DomainError::Database(format!("Failed to get is_account_locked: {}", e))
            })?,
            account_locked_until: row.try_get::<Option<DateTime<Utc>>, _>("account_locked_until")
                .map_err(|e| {
                    DomainError::Database(format!("Failed to get account_locked_until: {}", e))
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    async fn fetch_one_where(
        &self,
        clause: &str,
        binds: &[&str],
    ) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE {} LIMIT 1", SELECT_COLUMNS, clause);
        let mut q = sqlx::query(&query);
        for bind in binds {
            q = q.bind(*bind);
        }
        let result = q
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("id = ?", &[&id.to_string()]).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("email = ?", &[email]).await
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("phone_number = ?", &[phone_number])
            .await
    }

    async fn find_by_email_and_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<Account>, DomainError> {
        self.fetch_one_where("email = ? AND phone_number = ?", &[email, phone_number])
            .await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = ?) AS present")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to check email: {}", e)))?;
        let present: i64 = row
            .try_get("present")
            .map_err(|e| DomainError::Database(format!("Failed to get existence result: {}", e)))?;
        Ok(present == 1)
    }

    async fn exists_by_phone(&self, phone_number: &str) -> Result<bool, DomainError> {
        let row =
            sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE phone_number = ?) AS present")
                .bind(phone_number)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Database(format!("Failed to check phone: {}", e)))?;
        let present: i64 = row
            .try_get("present")
            .map_err(|e| DomainError::Database(format!("Failed to get existence result: {}", e)))?;
        Ok(present == 1)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, email, phone_number, password_hash, user_type,
                first_name, last_name, phone_verified, email_verified,
                is_active, is_account_locked, account_locked_until,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.phone_number)
            .bind(&account.password_hash)
            .bind(account.user_type.as_str())
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.phone_verified)
            .bind(account.email_verified)
            .bind(account.is_active)
            .bind(account.is_account_locked)
            .bind(account.account_locked_until)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create account: {}", e)))?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts SET
                email = ?,
                phone_number = ?,
                password_hash = ?,
                first_name = ?,
                last_name = ?,
                phone_verified = ?,
                email_verified = ?,
                is_active = ?,
                is_account_locked = ?,
                account_locked_until = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.email)
            .bind(&account.phone_number)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.phone_verified)
            .bind(account.email_verified)
            .bind(account.is_active)
            .bind(account.is_account_locked)
            .bind(account.account_locked_until)
            .bind(Utc::now())
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update account: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("account"));
        }

        let mut updated = account;
        updated.updated_at = Utc::now();
        Ok(updated)
    }

    async fn apply_verification(
        &self,
        account: &Account,
        code_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to open transaction: {}", e)))?;

        sqlx::query(
            r#"
            UPDATE accounts SET
                phone_verified = ?,
                email_verified = ?,
                is_active = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(account.phone_verified)
        .bind(account.email_verified)
        .bind(account.is_active)
        .bind(Utc::now())
        .bind(account.id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to update account flags: {}", e)))?;

        let consumed = sqlx::query(
            "UPDATE verification_codes SET is_used = TRUE WHERE id = ? AND is_used = FALSE",
        )
        .bind(code_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to consume code: {}", e)))?;

        if consumed.rows_affected() == 0 {
            // Dropping the transaction rolls the flag update back.
            return Err(DomainError::Database(
                "verification code already consumed".to_string(),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to commit verification: {}", e)))?;

        Ok(())
    }

    async fn apply_password_reset(
        &self,
        account: &Account,
        token_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to open transaction: {}", e)))?;

        sqlx::query(
            r#"
            UPDATE accounts SET
                password_hash = ?,
                is_account_locked = ?,
                account_locked_until = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&account.password_hash)
        .bind(account.is_account_locked)
        .bind(account.account_locked_until)
        .bind(Utc::now())
        .bind(account.id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to rotate password: {}", e)))?;

        let consumed =
            sqlx::query("UPDATE reset_tokens SET is_used = TRUE WHERE id = ? AND is_used = FALSE")
                .bind(token_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::Database(format!("Failed to consume token: {}", e)))?;

        if consumed.rows_affected() == 0 {
            return Err(DomainError::Database(
                "reset token already consumed".to_string(),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to commit reset: {}", e)))?;

        Ok(())
    }
}
