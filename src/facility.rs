use crate::models::{DomainError, FacilityDirectory};

/// HTTP-backed facility directory in the new system. A 404 means the
/// facility is unknown; everything else non-2xx is a lookup failure.
pub struct HttpFacilityDirectory {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpFacilityDirectory {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, DomainError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DomainError::FacilityLookup(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl FacilityDirectory for HttpFacilityDirectory {
    fn facility_exists(&self, facility_id: i64) -> Result<bool, DomainError> {
        let url = format!("{}/facilities/{facility_id}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DomainError::FacilityLookup(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(true)
        } else if status.as_u16() == 404 {
            Ok(false)
        } else {
            Err(DomainError::FacilityLookup(format!(
                "facility API returned {status}"
            )))
        }
    }
}
