//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository contract for Account entities.
///
/// The compound `apply_*` operations exist because the flows they back must
/// never be partially applied: implementations run them inside a single
/// database transaction.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique phone number
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError>;

    /// Find the account matching both the email and the phone number.
    ///
    /// Both values must belong to the same row; a pair split across two
    /// accounts yields `None`.
    async fn find_by_email_and_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Check whether an account exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether an account exists with the given phone number
    async fn exists_by_phone(&self, phone_number: &str) -> Result<bool, DomainError>;

    /// Persist a new account
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist updated account fields
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist the account's verification flags and mark the given
    /// verification code used, atomically. Neither write is visible unless
    /// both commit.
    async fn apply_verification(
        &self,
        account: &Account,
        code_id: Uuid,
    ) -> Result<(), DomainError>;

    /// Persist the account's rotated password hash and cleared lock fields,
    /// and mark the given reset token used, atomically.
    async fn apply_password_reset(
        &self,
        account: &Account,
        token_id: Uuid,
    ) -> Result<(), DomainError>;
}
