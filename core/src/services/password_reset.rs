//! Password reset engine: single-use token issuance and credential rotation.

use std::sync::Arc;

use mr_shared::utils::masking::mask_email;
use mr_shared::utils::validation;

use crate::domain::entities::reset_token::{ResetToken, TOKEN_EXPIRY_HOURS};
use crate::errors::{AccountError, DomainError, DomainResult};
use crate::repositories::{AccountRepository, ResetTokenRepository};
use crate::services::notifier::Notifier;
use crate::services::password;

/// Reset engine configuration
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// Base URL for building the reset link sent to users
    pub frontend_url: String,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
        }
    }
}

/// Issues reset tokens and performs the confirmed rotation.
pub struct PasswordResetService<A, R, N>
where
    A: AccountRepository,
    R: ResetTokenRepository,
    N: Notifier,
{
    account_repo: Arc<A>,
    token_repo: Arc<R>,
    notifier: Arc<N>,
    config: PasswordResetConfig,
}

impl<A, R, N> PasswordResetService<A, R, N>
where
    A: AccountRepository,
    R: ResetTokenRepository,
    N: Notifier,
{
    pub fn new(
        account_repo: Arc<A>,
        token_repo: Arc<R>,
        notifier: Arc<N>,
        config: PasswordResetConfig,
    ) -> Self {
        Self {
            account_repo,
            token_repo,
            notifier,
            config,
        }
    }

    /// Request a password reset for an email address.
    ///
    /// Returns `Ok(())` whether or not the email is known, so the response
    /// cannot be used to enumerate accounts. When the account exists, a
    /// fresh token is persisted and the reset link is dispatched after the
    /// write, fire-and-forget.
    pub async fn request_reset(&self, email: &str) -> DomainResult<()> {
        let account = match self.account_repo.find_by_email(email).await? {
            Some(account) => account,
            None => {
                tracing::debug!(
                    email = %mask_email(email),
                    "reset requested for unknown email"
                );
                return Ok(());
            }
        };

        let token = self
            .token_repo
            .create(ResetToken::issue(account.id))
            .await?;

        tracing::info!(account_id = %account.id, "password reset token issued");

        let subject = "MotoRide - Password Reset Request";
        let reset_url = format!(
            "{}/reset-password?token={}",
            self.config.frontend_url, token.token
        );
        let body = format!(
            "You requested to reset your MotoRide password.\n\n\
             Open the link below to choose a new password:\n{}\n\n\
             This link will expire in {} hours.\n\
             If you didn't request this reset, please ignore this email.",
            reset_url, TOKEN_EXPIRY_HOURS
        );
        if let Err(e) = self.notifier.send_email(&account.email, subject, &body).await {
            tracing::warn!(
                account_id = %account.id,
                error = %e,
                "reset email delivery failed"
            );
        }

        Ok(())
    }

    /// Confirm a reset: rotate the password hash, clear any lock, and
    /// consume the token, all or nothing.
    pub async fn confirm_reset(&self, token: &str, new_password: &str) -> DomainResult<()> {
        let token = self
            .token_repo
            .find_by_token(token)
            .await?
            .ok_or(AccountError::InvalidToken)?;

        if !token.is_valid() {
            return Err(AccountError::TokenExpiredOrUsed.into());
        }

        if !validation::is_acceptable_password(new_password) {
            return Err(DomainError::validation(
                "password must be at least 8 characters",
            ));
        }

        let mut account = self
            .account_repo
            .find_by_id(token.account_id)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: "reset token references a missing account".to_string(),
            })?;

        account.rotate_password(password::hash_password(new_password)?);
        account.clear_lock();

        self.account_repo
            .apply_password_reset(&account, token.id)
            .await?;

        tracing::info!(account_id = %account.id, "password reset completed");

        Ok(())
    }
}
