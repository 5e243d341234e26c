//! Verification engine: issues and consumes one-time codes, drives account
//! activation.

use std::sync::Arc;

use mr_shared::utils::masking::{mask_email, mask_phone};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::verification_code::{Channel, VerificationCode};
use crate::errors::{AccountError, DomainResult};
use crate::repositories::{AccountRepository, VerificationCodeRepository};

/// Drives the phone/email verification flow.
///
/// Code delivery is the caller's responsibility; this engine only
/// generates, selects, and consumes codes.
pub struct VerificationService<A, V>
where
    A: AccountRepository,
    V: VerificationCodeRepository,
{
    account_repo: Arc<A>,
    code_repo: Arc<V>,
}

impl<A, V> VerificationService<A, V>
where
    A: AccountRepository,
    V: VerificationCodeRepository,
{
    pub fn new(account_repo: Arc<A>, code_repo: Arc<V>) -> Self {
        Self {
            account_repo,
            code_repo,
        }
    }

    /// Issue a fresh code for (account, channel).
    ///
    /// Previously issued unused codes are left in place; selection during
    /// verification only ever considers the newest one.
    pub async fn issue_code(
        &self,
        account_id: Uuid,
        channel: Channel,
    ) -> DomainResult<VerificationCode> {
        let code = VerificationCode::issue(account_id, channel);
        let code = self.code_repo.create(code).await?;

        tracing::info!(
            account_id = %account_id,
            channel = channel.as_str(),
            "issued verification code"
        );

        Ok(code)
    }

    /// Verify a submitted code against the newest unused code for the
    /// channel and flip the account's verification state.
    ///
    /// The identifier is channel-appropriate: the phone number for the phone
    /// channel, the email address for the email channel.
    pub async fn verify(
        &self,
        identifier: &str,
        channel: Channel,
        submitted_code: &str,
    ) -> DomainResult<Account> {
        let account = match channel {
            Channel::Phone => self.account_repo.find_by_phone(identifier).await?,
            Channel::Email => self.account_repo.find_by_email(identifier).await?,
        };

        let mut account = match account {
            Some(account) => account,
            None => {
                tracing::debug!(
                    identifier = %self.mask_identifier(identifier, channel),
                    channel = channel.as_str(),
                    "verification for unknown identifier"
                );
                return Err(crate::errors::DomainError::not_found("account"));
            }
        };

        let code = self
            .code_repo
            .find_latest_unused(account.id, channel)
            .await?
            .ok_or(AccountError::InvalidCode)?;

        if !code.matches(submitted_code) {
            tracing::warn!(
                account_id = %account.id,
                channel = channel.as_str(),
                "verification code mismatch"
            );
            return Err(AccountError::InvalidCode.into());
        }

        if code.is_expired() {
            return Err(AccountError::CodeExpired.into());
        }

        account.confirm_channel(channel);
        self.account_repo
            .apply_verification(&account, code.id)
            .await?;

        tracing::info!(
            account_id = %account.id,
            channel = channel.as_str(),
            is_active = account.is_active,
            "channel verified"
        );

        Ok(account)
    }

    fn mask_identifier(&self, identifier: &str, channel: Channel) -> String {
        match channel {
            Channel::Phone => mask_phone(identifier),
            Channel::Email => mask_email(identifier),
        }
    }
}
