use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use mr_core::domain::entities::account::Account;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,

    pub password_confirm: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// E.164 phone number
    #[validate(length(min = 9, max = 16))]
    pub phone_number: String,

    /// "passenger" or "rider"
    pub user_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub account_id: Uuid,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhoneVerificationRequest {
    #[validate(length(min = 9, max = 16))]
    pub phone_number: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailVerificationRequest {
    #[validate(email)]
    pub email: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub message: String,
    pub phone_verified: bool,
    pub email_verified: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendCodeRequest {
    #[validate(email)]
    pub email: String,

    /// "phone" or "email"
    pub channel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetConfirmRequest {
    #[validate(length(equal = 64))]
    pub token: String,

    #[validate(length(min = 8))]
    pub new_password: String,

    pub new_password_confirm: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AccountRecoveryRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 9, max = 16))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStatusResponse {
    pub email: String,
    pub phone_number: String,
    pub phone_verified: bool,
    pub email_verified: bool,
    pub is_active: bool,
    pub is_account_locked: bool,
}

impl From<&Account> for AccountStatusResponse {
    fn from(account: &Account) -> Self {
        Self {
            email: account.email.clone(),
            phone_number: account.phone_number.clone(),
            phone_verified: account.phone_verified,
            email_verified: account.email_verified,
            is_active: account.is_active,
            is_account_locked: account.is_account_locked,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
