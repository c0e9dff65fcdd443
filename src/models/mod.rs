pub mod address;
pub mod allergy;
pub mod enums;
pub mod medication;
pub mod patient;

pub use address::*;
pub use allergy::*;
pub use medication::*;
pub use patient::*;

use thiserror::Error;

/// Validation failures raised by the domain constructors. The display text
/// doubles as the per-record failure reason in the run report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("first name is required")]
    MissingFirstName,

    #[error("last name is required")]
    MissingLastName,

    #[error("address label is required")]
    MissingAddressLabel,

    #[error("patient must have at least one address")]
    NoAddresses,

    #[error("patient already exists in the target store")]
    DuplicatePatient,

    #[error("facility id is required for a facility patient")]
    MissingFacilityId,

    #[error("invalid social security number: {0}")]
    InvalidSsn(String),

    #[error("document requires a file name and a storage path")]
    InvalidDocument,

    #[error("note requires a title and a body")]
    InvalidNote,

    #[error("medication name is required")]
    MissingMedicationName,

    #[error("medication directions are required")]
    MissingDirections,

    #[error("a status change requires a reason")]
    MissingStatusChangeReason,

    #[error("patient already linked to external system {0}")]
    DuplicateExternalId(String),

    #[error("allergy description is required")]
    MissingAllergyDescription,

    #[error("unknown facility {0}")]
    UnknownFacility(i64),

    #[error("patient lookup failed: {0}")]
    Lookup(String),

    #[error("facility lookup failed: {0}")]
    FacilityLookup(String),
}
