//! Record shapes of the legacy source system, as served by its export API.
//!
//! Field names mirror the legacy wire format (PascalCase, legacy spellings
//! like `Fname`/`Mrnumber`/`Iscycle`); everything optional in the source is
//! optional here so one malformed record never poisons a whole page.

pub mod client;

pub use client::*;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One page fetched from the legacy export endpoint. An empty patient list
/// signals end-of-data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyPage {
    #[serde(default)]
    pub patients: Vec<LegacyPatient>,
    #[serde(default)]
    pub patient_medications: Vec<LegacyMedication>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyPatient {
    pub patient_id: i64,
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<String>,
    /// Free-text date string; parsed leniently during transformation.
    pub dob: Option<String>,
    pub gender: Option<String>,
    #[serde(default)]
    pub patient_addresses: Vec<LegacyAddress>,
    pub facility_id_ref: Option<i64>,
    pub facility: Option<LegacyFacility>,
    pub patient_residential: Option<LegacyResidential>,
    pub nurse_id_ref: Option<i64>,
    pub patient_status: Option<String>,
    pub delivery_address: Option<String>,
    pub social_security_numb: Option<String>,
    pub mrnumber: Option<String>,
    pub main_diagnosis: Option<String>,
    #[serde(default)]
    pub patient_allergies: Vec<LegacyAllergy>,
    pub is_bp: Option<bool>,
    pub delivery_note: Option<String>,
    pub comments: Option<String>,
    pub profile_pic_path: Option<String>,
    #[serde(default)]
    pub patient_files: Vec<LegacyFile>,
    #[serde(default)]
    pub patient_notes: Vec<LegacyNote>,
    pub create_date: Option<NaiveDateTime>,
    pub update_date: Option<NaiveDateTime>,
    pub update_by: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyAddress {
    /// Free-text label; also the key matched against the patient's
    /// configured delivery address.
    pub address: Option<String>,
    pub address_type: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyFacility {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyResidential {
    pub wing_id: Option<i64>,
    pub room: Option<String>,
    pub diet: Option<String>,
    pub resuscitation: Option<LegacyResuscitation>,
    pub resuscitation_id: Option<i64>,
    pub resuscitation_display_value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyResuscitation {
    pub resuscitation_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyAllergy {
    pub allergy_desc: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyFile {
    pub file_name: Option<String>,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyNote {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyMedication {
    pub patient_medication_id: i64,
    pub patient_id_ref: i64,
    pub order_number: Option<String>,
    pub med_name: Option<String>,
    pub ndc: Option<String>,
    pub dispensable_generic_id: Option<i64>,
    pub dispensable_generic_desc: Option<String>,
    pub dispensable_drug_id: Option<i64>,
    pub dispensable_drug_desc: Option<String>,
    pub med_strength: Option<String>,
    pub med_strength_unit: Option<String>,
    pub comments: Option<String>,
    pub directions: Option<String>,
    pub frequency: Option<String>,
    pub route: Option<String>,
    pub quantity: Option<f64>,
    pub dosage: Option<String>,
    pub dose_form_desc: Option<String>,
    pub number_of_refills_allowed: Option<i32>,
    pub number_of_refills_remaining: Option<i32>,
    pub next_refill_date: Option<NaiveDateTime>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub iscycle: Option<bool>,
    pub isdaw: Option<bool>,
    pub isprn: Option<bool>,
    #[serde(default)]
    pub admin_hours: Vec<LegacyAdminHour>,
    pub patient_medication_status_id: Option<i32>,
    pub discontinuation_reason: Option<String>,
    pub payer: Option<String>,
    pub create_date: Option<NaiveDateTime>,
    pub update_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyAdminHour {
    pub patient_medication_admin_hour_id: i64,
    /// 12-hour clock string, "hh:mm AM/PM".
    pub hour: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_deserializes_pascal_case() {
        let json = r#"{
            "Patients": [{
                "PatientId": 12,
                "Fname": "Rosa",
                "Lname": "Delgado",
                "Dob": "1948-06-02",
                "Gender": "Female",
                "PatientAddresses": [{
                    "Address": "12 Main St, Fresno",
                    "AddressType": "Skilled Nursing Facility",
                    "Street": "12 Main St",
                    "City": "Fresno",
                    "State": "CA",
                    "ZipCode": "93650"
                }],
                "CreateDate": "2021-03-01T08:30:00"
            }],
            "PatientMedications": [{
                "PatientMedicationId": 900,
                "PatientIdRef": 12,
                "MedName": "Metformin",
                "AdminHours": [
                    {"PatientMedicationAdminHourId": 1, "Hour": "08:00 AM"}
                ]
            }]
        }"#;

        let page: LegacyPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.patients.len(), 1);
        assert_eq!(page.patients[0].patient_id, 12);
        assert_eq!(page.patients[0].fname.as_deref(), Some("Rosa"));
        assert_eq!(page.patients[0].patient_addresses.len(), 1);
        assert!(page.patients[0].create_date.is_some());
        assert_eq!(page.patient_medications[0].patient_id_ref, 12);
        assert_eq!(page.patient_medications[0].admin_hours[0].hour, "08:00 AM");
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let json = r#"{"Patients": [{"PatientId": 1}], "PatientMedications": []}"#;
        let page: LegacyPage = serde_json::from_str(json).unwrap();
        assert!(page.patients[0].patient_addresses.is_empty());
        assert!(page.patients[0].patient_files.is_empty());
        assert!(page.patients[0].patient_notes.is_empty());
        assert!(page.patients[0].patient_allergies.is_empty());
    }
}
