use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Unknown => "unknown",
});

str_enum!(PatientStatus {
    Active => "active",
    Inactive => "inactive",
    Discharged => "discharged",
    Deceased => "deceased",
});

str_enum!(AddressType {
    AssistedLiving => "assisted_living",
    BoardAndCare => "board_and_care",
    Residential => "residential",
    SkilledNursing => "skilled_nursing",
    Other => "other",
});

str_enum!(LocationOfService {
    Facility => "facility",
    Home => "home",
});

str_enum!(BillingType {
    Medicare => "medicare",
    Medicaid => "medicaid",
    Insurance => "insurance",
    Facility => "facility",
    Private => "private",
});

str_enum!(MedicationStatus {
    Active => "active",
    OnHold => "on_hold",
    Discontinued => "discontinued",
});

str_enum!(ExternalSystem {
    Legacy => "legacy",
});

impl Gender {
    /// Parse the legacy gender field. The source system stored enum member
    /// names ("Male"/"Female"), matched case-sensitively.
    pub fn from_legacy(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            "Unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl PatientStatus {
    /// Parse the legacy status field by its source-system member name.
    /// The legacy system spelled the inactive member "InActive".
    pub fn from_legacy(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(Self::Active),
            "InActive" => Some(Self::Inactive),
            "Discharged" => Some(Self::Discharged),
            "Deceased" => Some(Self::Deceased),
            _ => None,
        }
    }
}

impl BillingType {
    /// Match a legacy payer string against the billing-type member names.
    pub fn from_legacy(s: &str) -> Option<Self> {
        match s {
            "Medicare" => Some(Self::Medicare),
            "Medicaid" => Some(Self::Medicaid),
            "Insurance" => Some(Self::Insurance),
            "Facility" => Some(Self::Facility),
            "Private" => Some(Self::Private),
            _ => None,
        }
    }
}

impl MedicationStatus {
    /// Decode the legacy numeric medication status.
    pub fn from_legacy_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Active),
            2 => Some(Self::OnHold),
            3 => Some(Self::Discontinued),
            _ => None,
        }
    }
}

/// Resuscitation directives, decoded from the legacy numeric code. Stored on
/// the patient as a plain display string, so this never reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resuscitation {
    FullCode,
    Dnr,
    Dni,
    ComfortCare,
}

impl Resuscitation {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::FullCode),
            2 => Some(Self::Dnr),
            3 => Some(Self::Dni),
            4 => Some(Self::ComfortCare),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullCode => "FullCode",
            Self::Dnr => "DNR",
            Self::Dni => "DNI",
            Self::ComfortCare => "ComfortCare",
        }
    }
}
