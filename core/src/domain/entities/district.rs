//! District reference data for service coverage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A district the service operates in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub province: String,
    /// Inactive districts are hidden from the public listing
    #[serde(skip_serializing, default)]
    pub is_active: bool,
}
