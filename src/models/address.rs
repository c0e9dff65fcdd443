use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AddressType;
use super::DomainError;

/// One patient address. The free-text label is the identity the legacy
/// system used to pick out the delivery address, so it is required; the
/// structured fields are already defaulted by the field mapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub label: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub address_type: AddressType,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub is_delivery: bool,
    pub is_default: bool,
}

impl Address {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        label: &str,
        street: &str,
        city: &str,
        state: &str,
        zip: &str,
        address_type: AddressType,
        longitude: Option<f64>,
        latitude: Option<f64>,
        is_delivery: bool,
        is_default: bool,
    ) -> Result<Self, DomainError> {
        if label.trim().is_empty() {
            return Err(DomainError::MissingAddressLabel);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            address_type,
            longitude,
            latitude,
            is_delivery,
            is_default,
        })
    }
}
