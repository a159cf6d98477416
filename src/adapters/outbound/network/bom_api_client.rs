use crate::ports::outbound::PartCatalog;
use crate::rollup::domain::{BomEdge, PartId, PartRecord};
use crate::shared::error::RollupError;
use crate::shared::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

/// Default BoM API host
pub const DEFAULT_API_HOST: &str = "https://interviewbom.herokuapp.com";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct BomResponse {
    #[serde(default)]
    data: Option<Vec<BomEdge>>,
}

/// BomApiClient adapter for the BoM HTTP API
///
/// This adapter implements the PartCatalog port with a blocking reqwest
/// client. Every request is bounded by the configured timeout and is never
/// retried; any failure aborts the roll-up.
///
/// Endpoints:
/// - `GET {host}/bom/` returns `{"data": [{"id", "parent_part_id", "part_id", "quantity"}]}`
/// - `GET {host}/part/{id}` returns `{"id", "part_number"}`
pub struct BomApiClient {
    client: reqwest::blocking::Client,
    api_host: String,
}

impl BomApiClient {
    /// Creates a client for the default host and timeout
    pub fn new() -> Result<Self> {
        Self::with_config(
            DEFAULT_API_HOST,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Creates a client for an explicit host and per-request timeout
    pub fn with_config(api_host: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bom-rollup/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_host: api_host.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    fn bom_url(&self) -> String {
        format!("{}/bom/", self.api_host)
    }

    fn part_url(&self, part_id: PartId) -> String {
        format!("{}/part/{}", self.api_host, part_id)
    }

    /// Sends a GET request and decodes the JSON body
    ///
    /// Failures are logged at error level with the request path before
    /// being returned.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "Sending GET request to BoM API");

        let response = self.client.get(path).send().map_err(|e| {
            error!(path, error = %e, "Critical error sending GET request to BoM API");
            RollupError::Transport {
                path: path.to_string(),
                details: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            if status == StatusCode::NOT_FOUND {
                error!(path, status = status.as_u16(), body = %body, "BoM API resource not found");
            }
            error!(path, status = status.as_u16(), body = %body, "Critical error sending GET request to BoM API");
            return Err(RollupError::Upstream {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body = response.text().map_err(|e| {
            error!(path, error = %e, "Critical error reading BoM API response");
            RollupError::Transport {
                path: path.to_string(),
                details: e.to_string(),
            }
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!(path, error = %e, "BoM API returned an unexpected body");
            RollupError::InvalidResponse {
                path: path.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

// Note: no Default implementation; building the HTTP client can fail.

impl PartCatalog for BomApiClient {
    fn fetch_bill_of_materials(&self) -> Result<Vec<BomEdge>> {
        let response: BomResponse = self.get_json(&self.bom_url())?;
        Ok(response.data.unwrap_or_default())
    }

    fn resolve_part_number(&self, part_id: PartId) -> Result<PartRecord> {
        self.get_json(&self.part_url(part_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BomApiClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().api_host(), DEFAULT_API_HOST);
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client =
            BomApiClient::with_config("http://bom.test/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.bom_url(), "http://bom.test/bom/");
        assert_eq!(client.part_url(PartId::new(1766)), "http://bom.test/part/1766");
    }

    #[test]
    fn test_bom_response_missing_data_is_empty() {
        let response: BomResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.unwrap_or_default().is_empty());

        let response: BomResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(response.data.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_transport_error_for_unreachable_host() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let client =
            BomApiClient::with_config("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

        let err = client.fetch_bill_of_materials().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RollupError>(),
            Some(RollupError::Transport { .. })
        ));
    }
}
