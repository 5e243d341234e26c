//! District repository trait.

use async_trait::async_trait;

use crate::domain::entities::district::District;
use crate::errors::DomainError;

/// Repository contract for district reference data.
#[async_trait]
pub trait DistrictRepository: Send + Sync {
    /// Active districts ordered by name
    async fn list_active(&self) -> Result<Vec<District>, DomainError>;
}
