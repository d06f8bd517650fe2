//! EU VIES REST client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::registry::{RegistryClient, RegistryError};

const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// Default per-request timeout.
const VIES_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the EU VIES VAT number registry.
///
/// Blocking; one time-bounded request per check, no retries, no
/// authentication (VIES is a free public service). Hand it to
/// [`TaxIdValidator`](super::TaxIdValidator), which degrades every
/// failure to "not certified".
#[derive(Debug, Clone)]
pub struct ViesClient {
    timeout: Duration,
}

impl ViesClient {
    pub fn new() -> Self {
        Self {
            timeout: VIES_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ViesClient {
    fn default() -> Self {
        Self::new()
    }
}

/// VIES API request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViesRequest {
    country_code: String,
    vat_number: String,
}

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesResponse {
    valid: Option<bool>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

impl RegistryClient for ViesClient {
    fn check(&self, country_code: &str, number: &str) -> Result<bool, RegistryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        let req = ViesRequest {
            country_code: country_code.to_uppercase(),
            vat_number: number.to_string(),
        };

        let resp = client
            .post(VIES_URL)
            .json(&req)
            .send()
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RegistryError::Service(format!("HTTP {status}: {body}")));
        }

        let parsed: ViesResponse = serde_json::from_str(&body)
            .map_err(|e: serde_json::Error| RegistryError::Response(e.to_string()))?;

        if let Some(errors) = &parsed.error_wrappers {
            if let Some(err) = errors.first() {
                let msg = err
                    .message
                    .clone()
                    .or_else(|| err.error.clone())
                    .unwrap_or_else(|| "unknown error".into());
                return Err(RegistryError::Service(msg));
            }
        }

        Ok(parsed.valid.unwrap_or(false))
    }
}
