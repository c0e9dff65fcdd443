//! Pure field-mapping functions: one legacy field (or field cluster) in,
//! one target value object out. No I/O here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::TransformError;
use crate::legacy::{LegacyAddress, LegacyMedication, LegacyResidential};
use crate::models::enums::{AddressType, BillingType, Gender, PatientStatus, Resuscitation};
use crate::models::{Address, DomainError, MedicationMedicalInfo, MedicationRxInfo};

/// Outcome of a lenient classification. Unrecognized inputs still carry a
/// usable value; callers decide whether to log them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<T> {
    /// Input matched a known member.
    Resolved(T),
    /// Input was blank; the documented default applies.
    Defaulted(T),
    /// Input was present but matched nothing; the fallback applies.
    Unrecognized(T),
}

impl<T> Classified<T> {
    pub fn value(self) -> T {
        match self {
            Self::Resolved(v) | Self::Defaulted(v) | Self::Unrecognized(v) => v,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }
}

/// Resolve the legacy gender string. Blank defaults to `Unknown`; so does
/// anything that is not an exact member name — gender never fails a record.
pub fn resolve_gender(raw: &str) -> Classified<Gender> {
    if raw.trim().is_empty() {
        return Classified::Defaulted(Gender::Unknown);
    }
    match Gender::from_legacy(raw) {
        Some(gender) => Classified::Resolved(gender),
        None => Classified::Unrecognized(Gender::Unknown),
    }
}

/// Keyword table for address-type classification. Checked in order and the
/// first substring match wins: "board" must come before "skilled" so labels
/// like "board & care / skilled" classify as board-and-care.
const ADDRESS_TYPE_KEYWORDS: &[(&str, AddressType)] = &[
    ("assisted", AddressType::AssistedLiving),
    ("board", AddressType::BoardAndCare),
    ("residential", AddressType::Residential),
    ("skilled", AddressType::SkilledNursing),
    ("other", AddressType::Other),
];

/// Classify a free-text address type by case-insensitive substring match.
/// Empty or unmatched input is `Other`.
pub fn classify_address_type(raw: &str) -> AddressType {
    if raw.is_empty() {
        return AddressType::Other;
    }
    let lowered = raw.to_lowercase();
    for (keyword, address_type) in ADDRESS_TYPE_KEYWORDS {
        if lowered.contains(keyword) {
            return *address_type;
        }
    }
    AddressType::Other
}

fn default_if_blank<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

fn default_if_empty<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Build a target address from a legacy one. Blank structured fields fall
/// back to placeholders instead of failing; only a missing label fails.
/// The delivery flag is an exact, case-sensitive match between the address
/// label and the patient's configured delivery address.
pub fn map_address(
    legacy: &LegacyAddress,
    delivery_label: Option<&str>,
) -> Result<Address, DomainError> {
    let label = legacy.address.as_deref().unwrap_or("");
    let is_delivery = match (legacy.address.as_deref(), delivery_label) {
        (Some(label), Some(delivery)) => label == delivery,
        _ => false,
    };

    Address::new(
        label,
        default_if_blank(legacy.street.as_deref(), "-"),
        default_if_blank(legacy.city.as_deref(), "-"),
        default_if_blank(legacy.state.as_deref(), "CA"),
        default_if_blank(legacy.zip_code.as_deref(), "-"),
        classify_address_type(legacy.address_type.as_deref().unwrap_or("")),
        legacy.lng,
        legacy.lat,
        is_delivery,
        legacy.is_default == Some(true),
    )
}

/// Three-tier resuscitation fallback: explicit name, then decoded numeric
/// code, then the raw display value. None of them present means none.
pub fn resolve_resuscitation(residential: &LegacyResidential) -> Option<String> {
    residential
        .resuscitation
        .as_ref()
        .and_then(|r| r.resuscitation_name.clone())
        .or_else(|| {
            residential
                .resuscitation_id
                .and_then(Resuscitation::from_code)
                .map(|r| r.as_str().to_string())
        })
        .or_else(|| residential.resuscitation_display_value.clone())
}

/// Resolve the legacy patient status. Blank means `Inactive`; an
/// unrecognized value also resolves to `Inactive`, but tagged so the caller
/// can log it — the legacy data contains junk statuses and silently
/// guessing a live status for them would be worse.
pub fn resolve_status(raw: &str) -> Classified<PatientStatus> {
    if raw.trim().is_empty() {
        return Classified::Defaulted(PatientStatus::Inactive);
    }
    match PatientStatus::from_legacy(raw.trim()) {
        Some(status) => Classified::Resolved(status),
        None => Classified::Unrecognized(PatientStatus::Inactive),
    }
}

/// Parse an admin-hour string in the fixed legacy format "hh:mm AM/PM",
/// two-digit hour required ("08:00 AM", never "8:00 AM"). This is the one
/// mapping without a fallback: a bad hour fails the record.
pub fn parse_admin_hour(raw: &str) -> Result<NaiveTime, TransformError> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 8 && bytes[2] == b':' && bytes[5] == b' ';
    if !shaped {
        return Err(TransformError::AdminHour(raw.to_string()));
    }
    NaiveTime::parse_from_str(raw, "%I:%M %p")
        .map_err(|_| TransformError::AdminHour(raw.to_string()))
}

/// Match a legacy payer string against the billing types. Blank, unknown
/// or malformed payers resolve to no billing type rather than failing.
pub fn resolve_billing_type(raw: &str) -> Option<BillingType> {
    if raw.trim().is_empty() {
        return None;
    }
    BillingType::from_legacy(raw)
}

const BIRTH_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const BIRTH_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M:%S"];

/// Parse the free-text legacy birth date. The export emits a handful of
/// shapes; anything else fails the record.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, TransformError> {
    let trimmed = raw.trim();
    for format in BIRTH_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    for format in BIRTH_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }
    Err(TransformError::BirthDate(raw.to_string()))
}

/// Copy the drug identity fields of a legacy medication row.
pub fn map_medical_info(legacy: &LegacyMedication) -> Result<MedicationMedicalInfo, DomainError> {
    MedicationMedicalInfo::new(
        legacy.med_name.as_deref().unwrap_or(""),
        legacy.ndc.clone(),
        legacy.dispensable_generic_id,
        legacy.dispensable_generic_desc.clone(),
        legacy.dispensable_drug_id,
        legacy.dispensable_drug_desc.clone(),
        legacy.med_strength.clone(),
        legacy.med_strength_unit.clone(),
        legacy.comments.clone(),
    )
}

/// Copy the prescription fields. Directions fall back to the frequency,
/// then to a single space; the frequency falls back to a single space.
pub fn map_rx_info(legacy: &LegacyMedication) -> Result<MedicationRxInfo, DomainError> {
    let frequency = default_if_empty(legacy.frequency.as_deref(), " ");
    let directions = default_if_empty(legacy.directions.as_deref(), frequency);

    MedicationRxInfo::new(
        directions,
        frequency,
        legacy.route.clone(),
        legacy.quantity,
        legacy.dosage.clone(),
        legacy.dose_form_desc.clone(),
        legacy.number_of_refills_allowed,
        legacy.number_of_refills_remaining,
        legacy.next_refill_date.map(|d| d.date()),
        legacy.start_date.map(|d| d.date()),
        legacy.end_date.map(|d| d.date()),
        legacy.iscycle.unwrap_or(false),
        legacy.isdaw.unwrap_or(false),
        legacy.isprn.unwrap_or(false),
    )
}
