//! Account entity representing a registered user of the MotoRide platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::verification_code::Channel;

/// Represents the role of an account holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// A passenger requesting rides
    Passenger,
    /// A rider offering rides
    Rider,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Passenger => "passenger",
            UserType::Rider => "rider",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "passenger" => Some(UserType::Passenger),
            "rider" => Some(UserType::Rider),
            _ => None,
        }
    }
}

/// Account entity
///
/// Created inactive on registration; `is_active` flips to true only once
/// both the phone and the email channel have been verified, in either order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique email address
    pub email: String,

    /// Unique phone number (E.164)
    pub phone_number: String,

    /// Bcrypt hash of the password; never serialized outward
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Role of the account holder
    pub user_type: UserType,

    pub first_name: String,
    pub last_name: String,

    /// Whether the phone number has been verified
    pub phone_verified: bool,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Whether the account is activated (both channels verified)
    pub is_active: bool,

    /// Whether the account is currently locked
    pub is_account_locked: bool,

    /// When the lock expires, if a lock deadline was set
    pub account_locked_until: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new, inactive, unverified account
    pub fn new(
        email: String,
        phone_number: String,
        password_hash: String,
        user_type: UserType,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            phone_number,
            password_hash,
            user_type,
            first_name,
            last_name,
            phone_verified: false,
            email_verified: false,
            is_active: false,
            is_account_locked: false,
            account_locked_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the given channel verified; activates the account once both
    /// channels are verified.
    pub fn confirm_channel(&mut self, channel: Channel) {
        match channel {
            Channel::Phone => self.phone_verified = true,
            Channel::Email => self.email_verified = true,
        }
        if self.phone_verified && self.email_verified {
            self.is_active = true;
        }
        self.updated_at = Utc::now();
    }

    /// Locks the account, optionally until a deadline
    pub fn lock(&mut self, until: Option<DateTime<Utc>>) {
        self.is_account_locked = true;
        self.account_locked_until = until;
        self.updated_at = Utc::now();
    }

    /// Clears both lock fields
    pub fn clear_lock(&mut self) {
        self.is_account_locked = false;
        self.account_locked_until = None;
        self.updated_at = Utc::now();
    }

    /// Replaces the password hash
    pub fn rotate_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn is_passenger(&self) -> bool {
        self.user_type == UserType::Passenger
    }

    pub fn is_rider(&self) -> bool {
        self.user_type == UserType::Rider
    }
}
