//! Verification code entity for phone and email account confirmation.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Validity window for verification codes (10 minutes)
pub const CODE_EXPIRY_MINUTES: i64 = 10;

/// Delivery channel a code confirms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Phone,
    Email,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Phone => "phone",
            Channel::Email => "email",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "phone" => Some(Channel::Phone),
            "email" => Some(Channel::Email),
            _ => None,
        }
    }
}

/// A one-time 6-digit code tied to one account and one channel.
///
/// Issuing a new code does not touch earlier unused codes; only the
/// most-recently-created unused code per (account, channel) is considered
/// during verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the code row
    pub id: Uuid,

    /// Owning account
    pub account_id: Uuid,

    /// Channel this code confirms
    pub channel: Channel,

    /// The 6-digit code
    pub code: String,

    /// Whether the code has been consumed
    pub is_used: bool,

    pub created_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a new code with six digits drawn from the OS random source
    pub fn issue(account_id: Uuid, channel: Channel) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            channel,
            code: Self::generate_code(),
            is_used: false,
            created_at: Utc::now(),
        }
    }

    fn generate_code() -> String {
        let mut rng = OsRng;
        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// Whether the code is past its 10-minute validity window
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.created_at + Duration::minutes(CODE_EXPIRY_MINUTES)
    }

    /// Compares a submitted code in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Marks the code as consumed
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_code() {
        let account_id = Uuid::new_v4();
        let code = VerificationCode::issue(account_id, Channel::Phone);

        assert_eq!(code.account_id, account_id);
        assert_eq!(code.channel, Channel::Phone);
        assert_eq!(code.code.len(), CODE_LENGTH);
        assert!(code.code.chars().all(|c| c.is_ascii_digit()));
        assert!(!code.is_used);
        assert!(!code.is_expired());
    }

    #[test]
    fn test_codes_are_not_constant() {
        let account_id = Uuid::new_v4();
        let codes: std::collections::HashSet<String> = (0..100)
            .map(|_| VerificationCode::issue(account_id, Channel::Email).code)
            .collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_matches() {
        let code = VerificationCode::issue(Uuid::new_v4(), Channel::Phone);
        let submitted = code.code.clone();
        assert!(code.matches(&submitted));
        assert!(!code.matches("000000") || submitted == "000000");
        assert!(!code.matches("too-short"));
    }

    #[test]
    fn test_expiry_window() {
        let mut code = VerificationCode::issue(Uuid::new_v4(), Channel::Email);
        assert!(!code.is_expired());

        code.created_at = Utc::now() - Duration::minutes(CODE_EXPIRY_MINUTES + 1);
        assert!(code.is_expired());
    }

    #[test]
    fn test_channel_round_trip() {
        assert_eq!(Channel::parse("phone"), Some(Channel::Phone));
        assert_eq!(Channel::parse("email"), Some(Channel::Email));
        assert_eq!(Channel::parse("sms"), None);
        assert_eq!(Channel::Email.as_str(), "email");
    }
}
