//! Profile entity: one per account, with a role-tagged attribute payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::UserType;
use crate::errors::{DomainError, DomainResult};

/// Review state of a rider's submitted documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiderVerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl RiderVerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiderVerificationStatus::Pending => "pending",
            RiderVerificationStatus::Approved => "approved",
            RiderVerificationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(RiderVerificationStatus::Pending),
            "approved" => Some(RiderVerificationStatus::Approved),
            "rejected" => Some(RiderVerificationStatus::Rejected),
            _ => None,
        }
    }
}

/// Role-specific profile attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ProfileDetails {
    Passenger {
        preferred_payment_method: String,
        home_address: String,
        preferred_language: String,
        emergency_contact: String,
    },
    Rider {
        license_number: String,
        verification_status: RiderVerificationStatus,
        is_available: bool,
        current_latitude: Option<f64>,
        current_longitude: Option<f64>,
        average_rating: f64,
        total_rides: u32,
    },
}

impl ProfileDetails {
    /// The account role this payload belongs to
    pub fn role(&self) -> UserType {
        match self {
            ProfileDetails::Passenger { .. } => UserType::Passenger,
            ProfileDetails::Rider { .. } => UserType::Rider,
        }
    }
}

/// Profile entity, one-to-one with an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the profile
    pub id: Uuid,

    /// Owning account
    pub account_id: Uuid,

    /// Role-tagged attributes
    #[serde(flatten)]
    pub details: ProfileDetails,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile for an account
    pub fn new(account_id: Uuid, details: ProfileDetails) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// The role this profile describes
    pub fn role(&self) -> UserType {
        self.details.role()
    }

    pub fn is_rider(&self) -> bool {
        self.role() == UserType::Rider
    }

    /// True for rider profiles that should appear in the available view
    pub fn is_available_rider(&self) -> bool {
        matches!(
            self.details,
            ProfileDetails::Rider {
                is_available: true,
                verification_status: RiderVerificationStatus::Approved,
                ..
            }
        )
    }

    /// Replaces the role payload; the role itself cannot change
    pub fn update_details(&mut self, details: ProfileDetails) -> DomainResult<()> {
        if details.role() != self.role() {
            return Err(DomainError::validation("profile role cannot change"));
        }
        self.details = details;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Updates the rider's current coordinates
    pub fn set_location(&mut self, latitude: f64, longitude: f64) -> DomainResult<()> {
        match &mut self.details {
            ProfileDetails::Rider {
                current_latitude,
                current_longitude,
                ..
            } => {
                *current_latitude = Some(latitude);
                *current_longitude = Some(longitude);
                self.updated_at = Utc::now();
                Ok(())
            }
            ProfileDetails::Passenger { .. } => Err(DomainError::validation(
                "location updates apply to rider profiles only",
            )),
        }
    }
}
