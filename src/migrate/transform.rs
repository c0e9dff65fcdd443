//! Assembles one target patient aggregate from one legacy record and its
//! medication rows. Pure except for the lookup and directory seams; the
//! caller owns persistence and decides what to do with the result.

use tracing::{debug, warn};
use uuid::Uuid;

use super::mapper;
use super::TransformError;
use crate::legacy::{LegacyMedication, LegacyPatient};
use crate::models::enums::{ExternalSystem, LocationOfService, MedicationStatus};
use crate::models::{
    AdminHour, DocumentRef, ExternalId, FacilityDirectory, Medication, Note, Patient,
    PatientBasicInfo, PatientLookup, PatientPersonalInfo, PlaceOfService,
};

/// Seams the transformation consults: duplicate pre-check against the
/// target store and the facility registry of the new system.
pub struct TransformContext<'a> {
    pub lookup: &'a dyn PatientLookup,
    pub facilities: &'a dyn FacilityDirectory,
}

/// A legacy id paired with the freshly minted target id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdMapping {
    pub legacy_id: i64,
    pub new_id: Uuid,
}

/// A fully assembled aggregate plus the id mappings minted while building
/// it. The mappings belong to the caller only once the aggregate actually
/// persists; until then they are provisional.
#[derive(Debug)]
pub struct TransformedPatient {
    pub patient: Patient,
    pub medication_ids: Vec<IdMapping>,
    pub admin_hour_ids: Vec<IdMapping>,
}

/// Transform a single legacy patient. The first hard failure abandons the
/// record; recoverable oddities (unknown gender or status, one bad
/// medication) degrade gracefully and are logged instead.
pub fn transform(
    ctx: &TransformContext<'_>,
    legacy: &LegacyPatient,
    medications: &[&LegacyMedication],
) -> Result<TransformedPatient, TransformError> {
    let gender = mapper::resolve_gender(legacy.gender.as_deref().unwrap_or(""));
    if gender.is_unrecognized() {
        debug!(
            patient_id = legacy.patient_id,
            gender = legacy.gender.as_deref(),
            "unrecognized gender, defaulting to unknown"
        );
    }

    let dob = legacy
        .dob
        .as_deref()
        .ok_or(TransformError::MissingBirthDate)?;
    let birth_date = mapper::parse_birth_date(dob)?;

    let basic_info = PatientBasicInfo::new(
        legacy.fname.as_deref().unwrap_or(""),
        legacy.lname.as_deref().unwrap_or(""),
        legacy.email.clone(),
        legacy.phonenumber.clone(),
        birth_date,
        gender.value(),
    )?;

    let addresses = legacy
        .patient_addresses
        .iter()
        .map(|a| mapper::map_address(a, legacy.delivery_address.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;

    let status = mapper::resolve_status(legacy.patient_status.as_deref().unwrap_or(""));
    if status.is_unrecognized() {
        warn!(
            patient_id = legacy.patient_id,
            status = legacy.patient_status.as_deref(),
            "unrecognized patient status, treating as inactive"
        );
    }
    let status = status.value();

    // A facility reference of 0 in the export means "none"; a patient with
    // neither an explicit reference nor an embedded facility is retail.
    let facility_id = legacy
        .facility_id_ref
        .filter(|&id| id != 0)
        .or_else(|| legacy.facility.as_ref().map(|f| f.id));

    let mut patient = match facility_id {
        None => Patient::new_retail(ctx.lookup, basic_info, addresses, status)?,
        Some(fid) => {
            let residential = legacy.patient_residential.as_ref();
            let place = PlaceOfService::new(
                fid,
                residential
                    .and_then(|r| r.wing_id)
                    .map(|w| w.to_string()),
                residential.and_then(|r| r.room.clone()),
                legacy.nurse_id_ref.map(|n| n.to_string()),
                LocationOfService::Facility,
            )?;
            Patient::new_facility(ctx.lookup, basic_info, addresses, status, place)?
        }
    };

    let resuscitation = legacy
        .patient_residential
        .as_ref()
        .and_then(mapper::resolve_resuscitation);
    let allergies = legacy
        .patient_allergies
        .iter()
        .filter_map(|a| a.allergy_desc.clone())
        .collect();
    let personal_info = PatientPersonalInfo::new(
        legacy.social_security_numb.clone(),
        legacy.mrnumber.clone(),
        legacy.main_diagnosis.clone(),
        legacy
            .patient_residential
            .as_ref()
            .and_then(|r| r.diet.clone()),
        allergies,
        resuscitation,
    )?;
    patient.set_personal_info(personal_info);

    match legacy.is_bp {
        Some(true) => patient.enable_bubble_pack(),
        Some(false) => patient.disable_bubble_pack(),
        None => {}
    }

    patient.set_delivery_note(nonempty_or_space(legacy.delivery_note.as_deref()));
    patient.set_comment(nonempty_or_space(legacy.comments.as_deref()));
    if let Some(path) = legacy.profile_pic_path.as_deref() {
        if !path.is_empty() {
            patient.set_profile_picture(path);
        }
    }

    for file in &legacy.patient_files {
        patient.add_document(DocumentRef::new(
            file.file_name.as_deref().unwrap_or(""),
            file.file_path.as_deref().unwrap_or(""),
        )?);
    }
    for note in &legacy.patient_notes {
        patient.add_note(Note::new(
            note.title.as_deref().unwrap_or(""),
            note.body.as_deref().unwrap_or(""),
        )?);
    }

    let mut medication_ids = Vec::new();
    let mut admin_hour_ids = Vec::new();
    for legacy_med in medications {
        let medical_info = mapper::map_medical_info(legacy_med)?;
        let rx_info = mapper::map_rx_info(legacy_med)?;

        let mut hours = Vec::with_capacity(legacy_med.admin_hours.len());
        let mut hour_ids = Vec::with_capacity(legacy_med.admin_hours.len());
        for legacy_hour in &legacy_med.admin_hours {
            let hour = AdminHour::new(mapper::parse_admin_hour(&legacy_hour.hour)?);
            hour_ids.push(IdMapping {
                legacy_id: legacy_hour.patient_medication_admin_hour_id,
                new_id: hour.id,
            });
            hours.push(hour);
        }

        let billing_type =
            mapper::resolve_billing_type(legacy_med.payer.as_deref().unwrap_or(""));
        let mut medication = Medication::new(
            facility_id,
            legacy_med.order_number.clone(),
            medical_info,
            rx_info,
            billing_type,
            hours,
        )?;

        if let Some(status) = legacy_med
            .patient_medication_status_id
            .and_then(MedicationStatus::from_legacy_code)
        {
            if status != MedicationStatus::Active {
                medication.change_status(
                    status,
                    nonempty_or_space(legacy_med.discontinuation_reason.as_deref()),
                )?;
            }
        }
        if let Some(created) = legacy_med.create_date {
            medication.set_created_at(created);
        }
        if let Some(updated) = legacy_med.update_date {
            medication.set_updated_at(updated);
        }

        let medication_id = medication.id;
        match patient.add_medication(medication, facility_id, ctx.facilities) {
            Ok(()) => {
                medication_ids.push(IdMapping {
                    legacy_id: legacy_med.patient_medication_id,
                    new_id: medication_id,
                });
                admin_hour_ids.extend(hour_ids);
            }
            Err(e) => {
                warn!(
                    patient_id = legacy.patient_id,
                    medication_id = legacy_med.patient_medication_id,
                    error = %e,
                    "skipping medication"
                );
            }
        }
    }

    patient.add_external_id(ExternalId::new(
        legacy.patient_id.to_string(),
        ExternalSystem::Legacy,
    ))?;

    if let Some(created) = legacy.create_date {
        patient.set_created_at(created);
    }
    if let Some(updated) = legacy.update_date {
        patient.set_updated_at(updated);
    }
    if let Some(actor) = legacy.update_by {
        patient.set_updated_by(actor);
    }

    Ok(TransformedPatient {
        patient,
        medication_ids,
        admin_hour_ids,
    })
}

fn nonempty_or_space(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => " ",
    }
}
