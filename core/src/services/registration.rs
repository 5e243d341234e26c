//! Registration service: account creation plus initial code issuance and
//! delivery.

use std::sync::Arc;

use mr_shared::utils::masking::{mask_email, mask_phone};
use mr_shared::utils::validation;

use crate::domain::entities::account::{Account, UserType};
use crate::domain::entities::verification_code::{Channel, VerificationCode, CODE_EXPIRY_MINUTES};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AccountRepository, VerificationCodeRepository};
use crate::services::notifier::Notifier;
use crate::services::password;
use crate::services::verification::VerificationService;

/// Validated registration input
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
}

/// Creates accounts and kicks off both verification channels.
pub struct RegistrationService<A, V, N>
where
    A: AccountRepository,
    V: VerificationCodeRepository,
    N: Notifier,
{
    account_repo: Arc<A>,
    verification: Arc<VerificationService<A, V>>,
    notifier: Arc<N>,
}

impl<A, V, N> RegistrationService<A, V, N>
where
    A: AccountRepository,
    V: VerificationCodeRepository,
    N: Notifier,
{
    pub fn new(
        account_repo: Arc<A>,
        verification: Arc<VerificationService<A, V>>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            account_repo,
            verification,
            notifier,
        }
    }

    /// Register a new account.
    ///
    /// The account is persisted inactive and unverified, one code per
    /// channel is issued, and both codes are dispatched after the store
    /// writes. Delivery failures are logged and swallowed.
    pub async fn register(&self, input: NewRegistration) -> DomainResult<Account> {
        if !validation::is_valid_email(&input.email) {
            return Err(DomainError::validation("invalid email format"));
        }
        if !validation::is_valid_phone(&input.phone_number) {
            return Err(DomainError::validation("invalid phone number format"));
        }
        if !validation::is_acceptable_password(&input.password) {
            return Err(DomainError::validation(
                "password must be at least 8 characters",
            ));
        }
        if self.account_repo.exists_by_email(&input.email).await? {
            return Err(DomainError::validation("email already registered"));
        }
        if self.account_repo.exists_by_phone(&input.phone_number).await? {
            return Err(DomainError::validation("phone number already registered"));
        }

        let password_hash = password::hash_password(&input.password)?;
        let account = Account::new(
            input.email,
            input.phone_number,
            password_hash,
            input.user_type,
            input.first_name,
            input.last_name,
        );
        let account = self.account_repo.create(account).await?;

        let phone_code = self
            .verification
            .issue_code(account.id, Channel::Phone)
            .await?;
        let email_code = self
            .verification
            .issue_code(account.id, Channel::Email)
            .await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            phone = %mask_phone(&account.phone_number),
            "account registered, verification codes issued"
        );

        self.dispatch_codes(&account, &phone_code, &email_code).await;

        Ok(account)
    }

    /// Re-issue and dispatch a verification code for one channel.
    pub async fn resend_code(
        &self,
        email: &str,
        channel: Channel,
    ) -> DomainResult<()> {
        let account = self
            .account_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("account"))?;

        let code = self.verification.issue_code(account.id, channel).await?;

        match channel {
            Channel::Phone => {
                self.send_phone_code(&account, &code).await;
            }
            Channel::Email => {
                self.send_email_code(&account, &code).await;
            }
        }

        Ok(())
    }

    async fn dispatch_codes(
        &self,
        account: &Account,
        phone_code: &VerificationCode,
        email_code: &VerificationCode,
    ) {
        self.send_phone_code(account, phone_code).await;
        self.send_email_code(account, email_code).await;
    }

    async fn send_phone_code(&self, account: &Account, code: &VerificationCode) {
        let message = format!(
            "Your MotoRide verification code is: {}. This code will expire in {} minutes.",
            code.code, CODE_EXPIRY_MINUTES
        );
        if let Err(e) = self
            .notifier
            .send_sms(&account.phone_number, &message)
            .await
        {
            tracing::warn!(
                account_id = %account.id,
                phone = %mask_phone(&account.phone_number),
                error = %e,
                "verification SMS delivery failed"
            );
        }
    }

    async fn send_email_code(&self, account: &Account, code: &VerificationCode) {
        let subject = "MotoRide - Email Verification Code";
        let body = format!(
            "Welcome to MotoRide{}!\n\n\
             Your email verification code is: {}\n\n\
             This code will expire in {} minutes.\n\
             If you didn't request this code, please ignore this email.",
            if account.first_name.is_empty() {
                String::new()
            } else {
                format!(", {}", account.first_name)
            },
            code.code,
            CODE_EXPIRY_MINUTES
        );
        if let Err(e) = self.notifier.send_email(&account.email, subject, &body).await {
            tracing::warn!(
                account_id = %account.id,
                email = %mask_email(&account.email),
                error = %e,
                "verification email delivery failed"
            );
        }
    }
}
