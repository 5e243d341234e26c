//! Verification code repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_code::{Channel, VerificationCode};
use crate::errors::DomainError;

/// Repository contract for verification codes.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Persist a newly issued code. Earlier unused codes for the same
    /// (account, channel) are left untouched.
    async fn create(&self, code: VerificationCode) -> Result<VerificationCode, DomainError>;

    /// Select the most-recently-created unused code for (account, channel).
    ///
    /// This is the only code verification considers; older unused codes are
    /// never selected once a newer one exists.
    async fn find_latest_unused(
        &self,
        account_id: Uuid,
        channel: Channel,
    ) -> Result<Option<VerificationCode>, DomainError>;
}
