use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{BillingType, MedicationStatus};
use super::DomainError;

/// Drug identity fields copied from the legacy medication row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationMedicalInfo {
    pub name: String,
    pub ndc: Option<String>,
    pub generic_id: Option<i64>,
    pub generic_desc: Option<String>,
    pub drug_id: Option<i64>,
    pub drug_desc: Option<String>,
    pub strength: Option<String>,
    pub strength_unit: Option<String>,
    pub comments: Option<String>,
}

impl MedicationMedicalInfo {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        ndc: Option<String>,
        generic_id: Option<i64>,
        generic_desc: Option<String>,
        drug_id: Option<i64>,
        drug_desc: Option<String>,
        strength: Option<String>,
        strength_unit: Option<String>,
        comments: Option<String>,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::MissingMedicationName);
        }
        Ok(Self {
            name: name.to_string(),
            ndc,
            generic_id,
            generic_desc,
            drug_id,
            drug_desc,
            strength,
            strength_unit,
            comments,
        })
    }
}

/// Prescription instructions. Directions are required; the field mapper
/// guarantees a single-space fallback so migration never trips on blanks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationRxInfo {
    pub directions: String,
    pub frequency: String,
    pub route: Option<String>,
    pub quantity: Option<f64>,
    pub dosage: Option<String>,
    pub dose_form: Option<String>,
    pub refills_allowed: Option<i32>,
    pub refills_remaining: Option<i32>,
    pub next_refill_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_cycle: bool,
    pub is_daw: bool,
    pub is_prn: bool,
}

impl MedicationRxInfo {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        directions: &str,
        frequency: &str,
        route: Option<String>,
        quantity: Option<f64>,
        dosage: Option<String>,
        dose_form: Option<String>,
        refills_allowed: Option<i32>,
        refills_remaining: Option<i32>,
        next_refill_date: Option<NaiveDate>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        is_cycle: bool,
        is_daw: bool,
        is_prn: bool,
    ) -> Result<Self, DomainError> {
        if directions.is_empty() {
            return Err(DomainError::MissingDirections);
        }
        Ok(Self {
            directions: directions.to_string(),
            frequency: frequency.to_string(),
            route,
            quantity,
            dosage,
            dose_form,
            refills_allowed,
            refills_remaining,
            next_refill_date,
            start_date,
            end_date,
            is_cycle,
            is_daw,
            is_prn,
        })
    }
}

/// A scheduled time-of-day at which a dose is administered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminHour {
    pub id: Uuid,
    pub hour: NaiveTime,
}

impl AdminHour {
    pub fn new(hour: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            hour,
        }
    }
}

/// One entry in a medication's status-change history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationStatusChange {
    pub status: MedicationStatus,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub order_number: Option<String>,
    pub facility_id: Option<i64>,
    pub medical_info: MedicationMedicalInfo,
    pub rx_info: MedicationRxInfo,
    pub billing_type: Option<BillingType>,
    pub admin_hours: Vec<AdminHour>,
    pub status: MedicationStatus,
    pub status_history: Vec<MedicationStatusChange>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Medication {
    pub fn new(
        facility_id: Option<i64>,
        order_number: Option<String>,
        medical_info: MedicationMedicalInfo,
        rx_info: MedicationRxInfo,
        billing_type: Option<BillingType>,
        admin_hours: Vec<AdminHour>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: Uuid::new_v4(),
            order_number,
            facility_id,
            medical_info,
            rx_info,
            billing_type,
            admin_hours,
            status: MedicationStatus::Active,
            status_history: Vec::new(),
            created_at: None,
            updated_at: None,
        })
    }

    /// Apply a status transition with a reason, recording it in the history.
    pub fn change_status(
        &mut self,
        status: MedicationStatus,
        reason: &str,
    ) -> Result<(), DomainError> {
        if reason.is_empty() {
            return Err(DomainError::MissingStatusChangeReason);
        }
        self.status = status;
        self.status_history.push(MedicationStatusChange {
            status,
            reason: reason.to_string(),
        });
        Ok(())
    }

    pub fn set_created_at(&mut self, at: NaiveDateTime) {
        self.created_at = Some(at);
    }

    pub fn set_updated_at(&mut self, at: NaiveDateTime) {
        self.updated_at = Some(at);
    }
}
