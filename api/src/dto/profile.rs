use serde::{Deserialize, Serialize};
use validator::Validate;

use mr_core::domain::entities::profile::{Profile, ProfileDetails, RiderVerificationStatus};

/// Role-tagged profile payload accepted on create/update.
///
/// Server-managed rider fields (verification status, rating, ride count)
/// are not part of the request surface: they start at their defaults on
/// create and are preserved on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ProfileDetailsDto {
    Passenger {
        #[serde(default)]
        preferred_payment_method: String,
        #[serde(default)]
        home_address: String,
        #[serde(default)]
        preferred_language: String,
        #[serde(default)]
        emergency_contact: String,
    },
    Rider {
        license_number: String,
        #[serde(default)]
        is_available: bool,
    },
}

impl ProfileDetailsDto {
    /// Details for a brand-new profile
    pub fn into_new_details(self) -> ProfileDetails {
        match self {
            ProfileDetailsDto::Passenger {
                preferred_payment_method,
                home_address,
                preferred_language,
                emergency_contact,
            } => ProfileDetails::Passenger {
                preferred_payment_method,
                home_address,
                preferred_language,
                emergency_contact,
            },
            ProfileDetailsDto::Rider {
                license_number,
                is_available,
            } => ProfileDetails::Rider {
                license_number,
                verification_status: RiderVerificationStatus::Pending,
                is_available,
                current_latitude: None,
                current_longitude: None,
                average_rating: 0.0,
                total_rides: 0,
            },
        }
    }

    /// Details for an update, carrying the server-managed fields over from
    /// the current payload
    pub fn into_updated_details(self, current: &ProfileDetails) -> ProfileDetails {
        match (self, current) {
            (
                ProfileDetailsDto::Rider {
                    license_number,
                    is_available,
                },
                ProfileDetails::Rider {
                    verification_status,
                    current_latitude,
                    current_longitude,
                    average_rating,
                    total_rides,
                    ..
                },
            ) => ProfileDetails::Rider {
                license_number,
                verification_status: *verification_status,
                is_available,
                current_latitude: *current_latitude,
                current_longitude: *current_longitude,
                average_rating: *average_rating,
                total_rides: *total_rides,
            },
            (dto, _) => dto.into_new_details(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub current_latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub current_longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<Profile>,
    pub count: usize,
}

impl ProfileListResponse {
    pub fn new(profiles: Vec<Profile>) -> Self {
        let count = profiles.len();
        Self { profiles, count }
    }
}
