//! Password reset token repository trait.

use async_trait::async_trait;

use crate::domain::entities::reset_token::ResetToken;
use crate::errors::DomainError;

/// Repository contract for reset tokens.
#[async_trait]
pub trait ResetTokenRepository: Send + Sync {
    /// Persist a newly issued token
    async fn create(&self, token: ResetToken) -> Result<ResetToken, DomainError>;

    /// Look up a token by its opaque string value
    async fn find_by_token(&self, token: &str) -> Result<Option<ResetToken>, DomainError>;
}
