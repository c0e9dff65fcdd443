use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::enums::ExternalSystem;
use crate::models::{DomainError, Patient, PatientBasicInfo, PatientLookup};

/// Persist a fully assembled patient aggregate with all child rows in one
/// transaction. Either everything lands or nothing does.
pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    let allergy_descriptions = patient
        .personal_info
        .as_ref()
        .map(|p| serde_json::to_string(&p.allergies))
        .transpose()
        .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;

    tx.execute(
        "INSERT INTO patients (id, first_name, last_name, email, phone, birth_date, gender,
         status, facility_id, wing, room, nurse_ref, location_of_service, ssn,
         medical_record_number, diagnosis, diet, resuscitation, allergy_descriptions,
         bubble_pack, delivery_note, comment, profile_picture, created_at, updated_at, updated_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17,
                 ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26)",
        params![
            patient.id.to_string(),
            patient.basic_info.first_name,
            patient.basic_info.last_name,
            patient.basic_info.email,
            patient.basic_info.phone,
            patient.basic_info.birth_date.to_string(),
            patient.basic_info.gender.as_str(),
            patient.status.as_str(),
            patient.place_of_service.as_ref().map(|p| p.facility_id),
            patient.place_of_service.as_ref().and_then(|p| p.wing.clone()),
            patient.place_of_service.as_ref().and_then(|p| p.room.clone()),
            patient
                .place_of_service
                .as_ref()
                .and_then(|p| p.nurse_ref.clone()),
            patient
                .place_of_service
                .as_ref()
                .map(|p| p.location.as_str()),
            patient.personal_info.as_ref().and_then(|p| p.ssn.clone()),
            patient
                .personal_info
                .as_ref()
                .and_then(|p| p.medical_record_number.clone()),
            patient
                .personal_info
                .as_ref()
                .and_then(|p| p.diagnosis.clone()),
            patient.personal_info.as_ref().and_then(|p| p.diet.clone()),
            patient
                .personal_info
                .as_ref()
                .and_then(|p| p.resuscitation.clone()),
            allergy_descriptions,
            patient.bubble_pack.map(|b| b as i32),
            patient.delivery_note,
            patient.comment,
            patient.profile_picture,
            patient.created_at.map(|d| d.to_string()),
            patient.updated_at.map(|d| d.to_string()),
            patient.updated_by,
        ],
    )?;

    for address in &patient.addresses {
        tx.execute(
            "INSERT INTO addresses (id, patient_id, label, street, city, state, zip,
             address_type, longitude, latitude, is_delivery, is_default)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                address.id.to_string(),
                patient.id.to_string(),
                address.label,
                address.street,
                address.city,
                address.state,
                address.zip,
                address.address_type.as_str(),
                address.longitude,
                address.latitude,
                address.is_delivery as i32,
                address.is_default as i32,
            ],
        )?;
    }

    for med in &patient.medications {
        tx.execute(
            "INSERT INTO medications (id, patient_id, order_number, facility_id, name, ndc,
             generic_id, generic_desc, drug_id, drug_desc, strength, strength_unit, comments,
             directions, frequency, route, quantity, dosage, dose_form, refills_allowed,
             refills_remaining, next_refill_date, start_date, end_date, is_cycle, is_daw,
             is_prn, billing_type, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                     ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30, ?31)",
            params![
                med.id.to_string(),
                patient.id.to_string(),
                med.order_number,
                med.facility_id,
                med.medical_info.name,
                med.medical_info.ndc,
                med.medical_info.generic_id,
                med.medical_info.generic_desc,
                med.medical_info.drug_id,
                med.medical_info.drug_desc,
                med.medical_info.strength,
                med.medical_info.strength_unit,
                med.medical_info.comments,
                med.rx_info.directions,
                med.rx_info.frequency,
                med.rx_info.route,
                med.rx_info.quantity,
                med.rx_info.dosage,
                med.rx_info.dose_form,
                med.rx_info.refills_allowed,
                med.rx_info.refills_remaining,
                med.rx_info.next_refill_date.map(|d| d.to_string()),
                med.rx_info.start_date.map(|d| d.to_string()),
                med.rx_info.end_date.map(|d| d.to_string()),
                med.rx_info.is_cycle as i32,
                med.rx_info.is_daw as i32,
                med.rx_info.is_prn as i32,
                med.billing_type.map(|b| b.as_str()),
                med.status.as_str(),
                med.created_at.map(|d| d.to_string()),
                med.updated_at.map(|d| d.to_string()),
            ],
        )?;

        for hour in &med.admin_hours {
            tx.execute(
                "INSERT INTO admin_hours (id, medication_id, hour) VALUES (?1, ?2, ?3)",
                params![
                    hour.id.to_string(),
                    med.id.to_string(),
                    hour.hour.to_string()
                ],
            )?;
        }

        for change in &med.status_history {
            tx.execute(
                "INSERT INTO medication_status_changes (medication_id, status, reason)
                 VALUES (?1, ?2, ?3)",
                params![med.id.to_string(), change.status.as_str(), change.reason],
            )?;
        }
    }

    for note in &patient.notes {
        tx.execute(
            "INSERT INTO patient_notes (id, patient_id, title, body) VALUES (?1, ?2, ?3, ?4)",
            params![
                note.id.to_string(),
                patient.id.to_string(),
                note.title,
                note.body
            ],
        )?;
    }

    for doc in &patient.documents {
        tx.execute(
            "INSERT INTO patient_documents (id, patient_id, file_name, storage_path)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                doc.id.to_string(),
                patient.id.to_string(),
                doc.file_name,
                doc.storage_path
            ],
        )?;
    }

    for external_id in &patient.external_ids {
        tx.execute(
            "INSERT INTO external_ids (value, system, patient_id) VALUES (?1, ?2, ?3)",
            params![
                external_id.value,
                external_id.system.as_str(),
                patient.id.to_string()
            ],
        )?;
    }

    tx.commit()?;
    Ok(())
}

/// Pre-check used by the sink before inserting a migrated aggregate.
pub fn patient_exists_by_external_id(
    conn: &Connection,
    value: &str,
    system: ExternalSystem,
) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM external_ids WHERE value = ?1 AND system = ?2",
        params![value, system.as_str()],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn patient_exists_by_identity(
    conn: &Connection,
    basic_info: &PatientBasicInfo,
) -> Result<bool, DatabaseError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM patients
         WHERE first_name = ?1 AND last_name = ?2 AND birth_date = ?3",
        params![
            basic_info.first_name,
            basic_info.last_name,
            basic_info.birth_date.to_string()
        ],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Duplicate pre-check backed by the target store, consulted by the patient
/// constructors.
pub struct SqlitePatientLookup<'a> {
    pub conn: &'a Connection,
}

impl PatientLookup for SqlitePatientLookup<'_> {
    fn exists(&self, basic_info: &PatientBasicInfo) -> Result<bool, DomainError> {
        patient_exists_by_identity(self.conn, basic_info)
            .map_err(|e| DomainError::Lookup(e.to_string()))
    }
}
