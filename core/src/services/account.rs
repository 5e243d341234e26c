//! Account lock/recovery controller and status snapshot.

use std::sync::Arc;

use mr_shared::utils::masking::{mask_email, mask_phone};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{AccountError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::notifier::Notifier;

/// Handles locked-account recovery and the status view.
///
/// Locks themselves are set by the failed-login policy outside this
/// subsystem; this service only detects and clears them.
pub struct AccountService<A, N>
where
    A: AccountRepository,
    N: Notifier,
{
    account_repo: Arc<A>,
    notifier: Arc<N>,
}

impl<A, N> AccountService<A, N>
where
    A: AccountRepository,
    N: Notifier,
{
    pub fn new(account_repo: Arc<A>, notifier: Arc<N>) -> Self {
        Self {
            account_repo,
            notifier,
        }
    }

    /// Unlock an account after a two-factor identity confirmation.
    ///
    /// Both the email and the phone number must belong to the same account;
    /// the account must currently be locked. The recovery notification goes
    /// out after the unlock commits and never fails the request.
    pub async fn recover(&self, email: &str, phone_number: &str) -> DomainResult<Account> {
        let mut account = self
            .account_repo
            .find_by_email_and_phone(email, phone_number)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))?;

        if !account.is_account_locked {
            return Err(AccountError::NotLocked.into());
        }

        account.clear_lock();
        let account = self.account_repo.update(account).await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            "account recovered"
        );

        self.send_recovery_notification(&account).await;

        Ok(account)
    }

    /// Status snapshot for the authenticated account
    pub async fn account_status(&self, account_id: Uuid) -> DomainResult<Account> {
        self.account_repo
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))
    }

    async fn send_recovery_notification(&self, account: &Account) {
        let subject = "MotoRide - Account Recovered";
        let body = "Your MotoRide account has been successfully recovered.\n\
                    You can now log in using your credentials.\n\
                    If you didn't request this recovery, please contact support immediately.";
        if let Err(e) = self.notifier.send_email(&account.email, subject, body).await {
            tracing::warn!(
                account_id = %account.id,
                error = %e,
                "recovery email delivery failed"
            );
        }

        let sms = "Your MotoRide account has been recovered. \
                   If you didn't request this, contact support.";
        if let Err(e) = self.notifier.send_sms(&account.phone_number, sms).await {
            tracing::warn!(
                account_id = %account.id,
                phone = %mask_phone(&account.phone_number),
                error = %e,
                "recovery SMS delivery failed"
            );
        }
    }
}
