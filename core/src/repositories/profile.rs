//! Profile repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

/// Repository contract for passenger/rider profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError>;

    /// Find the profile owned by an account (at most one)
    async fn find_by_account(&self, account_id: Uuid) -> Result<Option<Profile>, DomainError>;

    /// Persist a new profile
    async fn create(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Persist updated profile fields
    async fn update(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Delete a profile; returns false when no row matched
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List every profile (administrative surface)
    async fn list_all(&self) -> Result<Vec<Profile>, DomainError>;

    /// Rider profiles with `is_available = true` and approved documents
    async fn find_available_riders(&self) -> Result<Vec<Profile>, DomainError>;
}
