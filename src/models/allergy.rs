use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainError;

/// Reference-data allergy term seeded into the target store before the
/// migration runs. Matched by exact description string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allergy {
    pub id: Uuid,
    pub description: String,
}

impl Allergy {
    pub fn new(description: &str) -> Result<Self, DomainError> {
        if description.trim().is_empty() {
            return Err(DomainError::MissingAllergyDescription);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            description: description.to_string(),
        })
    }
}
