//! Account state error taxonomy
//!
//! These errors represent the rejection paths of the verification, password
//! reset, and recovery flows. They all surface as client errors; the HTTP
//! mapping lives in the presentation layer.

use thiserror::Error;

/// Errors raised by account verification, reset, and recovery operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code has expired")]
    CodeExpired,

    #[error("Invalid reset token")]
    InvalidToken,

    #[error("Reset token has expired or already been used")]
    TokenExpiredOrUsed,

    #[error("Account is not locked")]
    NotLocked,
}

impl AccountError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            AccountError::InvalidCode => "INVALID_CODE",
            AccountError::CodeExpired => "CODE_EXPIRED",
            AccountError::InvalidToken => "INVALID_TOKEN",
            AccountError::TokenExpiredOrUsed => "TOKEN_EXPIRED_OR_USED",
            AccountError::NotLocked => "NOT_LOCKED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AccountError::InvalidCode.to_string(),
            "Invalid verification code"
        );
        assert_eq!(
            AccountError::TokenExpiredOrUsed.to_string(),
            "Reset token has expired or already been used"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AccountError::CodeExpired.code(), "CODE_EXPIRED");
        assert_eq!(AccountError::NotLocked.code(), "NOT_LOCKED");
    }
}
