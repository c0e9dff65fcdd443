use thiserror::Error;

use super::LegacyPage;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("cannot reach legacy export API at {0}")]
    Connection(String),

    #[error("legacy export API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode legacy page: {0}")]
    Decode(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}

/// Paginated access to the legacy source system.
pub trait LegacySource {
    fn fetch_page(&self, page_size: u32, page_number: u32) -> Result<LegacyPage, SourceError>;
}

/// HTTP client for the legacy export endpoint.
pub struct HttpLegacySource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpLegacySource {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl LegacySource for HttpLegacySource {
    fn fetch_page(&self, page_size: u32, page_number: u32) -> Result<LegacyPage, SourceError> {
        let url = format!(
            "{}/GetAllPatients?PageSize={page_size}&PageNumber={page_number}",
            self.base_url
        );

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() {
                SourceError::Connection(self.base_url.clone())
            } else {
                SourceError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<LegacyPage>()
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}
