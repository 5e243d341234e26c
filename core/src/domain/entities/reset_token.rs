//! Single-use password reset token entity.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of random bytes behind a token (hex-encoded to 64 characters)
const TOKEN_BYTES: usize = 32;

/// Validity window for reset tokens (24 hours)
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// An opaque, unguessable reset token tied to one account.
///
/// Consumed exactly once; a used or expired token is rejected uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetToken {
    /// Unique identifier for the token row
    pub id: Uuid,

    /// Owning account
    pub account_id: Uuid,

    /// 64-hex-character opaque token
    pub token: String,

    /// Whether the token has been consumed
    pub is_used: bool,

    pub created_at: DateTime<Utc>,
}

impl ResetToken {
    /// Creates a new token from 32 bytes of OS randomness
    pub fn issue(account_id: Uuid) -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self {
            id: Uuid::new_v4(),
            account_id,
            token: hex::encode(bytes),
            is_used: false,
            created_at: Utc::now(),
        }
    }

    /// Whether the token is past its 24-hour validity window
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.created_at + Duration::hours(TOKEN_EXPIRY_HOURS)
    }

    /// A token is spendable when it is unused and unexpired
    pub fn is_valid(&self) -> bool {
        !self.is_used && !self.is_expired()
    }

    /// Marks the token as consumed
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_token() {
        let account_id = Uuid::new_v4();
        let token = ResetToken::issue(account_id);

        assert_eq!(token.account_id, account_id);
        assert_eq!(token.token.len(), 64);
        assert!(token.token.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!token.is_used);
        assert!(token.is_valid());
    }

    #[test]
    fn test_tokens_are_unique() {
        let account_id = Uuid::new_v4();
        let a = ResetToken::issue(account_id);
        let b = ResetToken::issue(account_id);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_used_token_is_invalid() {
        let mut token = ResetToken::issue(Uuid::new_v4());
        token.mark_used();
        assert!(!token.is_valid());
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let mut token = ResetToken::issue(Uuid::new_v4());
        token.created_at = Utc::now() - Duration::hours(TOKEN_EXPIRY_HOURS + 1);
        assert!(token.is_expired());
        assert!(!token.is_valid());
    }
}
