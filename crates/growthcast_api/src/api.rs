//! Blocking HTTP client for the forecast service.
//!
//! Two endpoints, scoped to a scenario:
//! - `GET  /api/scenarios/{id}/parameters` — current parameter set
//! - `POST /api/scenarios/{id}/parameters/update` — store parameters and
//!   recompute the forecast, returning a yearly summary

use std::time::Duration;

use serde::Deserialize;

use crate::params::ParameterSet;

/// Computed forecast summary returned by the update call.
///
/// The shape belongs to the service; we hand it to the caller untouched.
pub type YearlySummary = serde_json::Value;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Body of a successful `parameters/update` round trip.
///
/// `status` is `"success"` when the service accepted the parameters; any
/// other value is a logical rejection carried in `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub yearly_summary: Option<YearlySummary>,
}

impl UpdateResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Client bound to one service instance and one forecast scenario.
pub struct ForecastClient {
    http: reqwest::blocking::Client,
    base_url: String,
    scenario_id: u64,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>, scenario_id: u64) -> Result<Self, ApiError> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            scenario_id,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/scenarios/{}/{path}", self.base_url, self.scenario_id)
    }

    /// Fetch the stored parameter set.
    ///
    /// `Ok(None)` means the scenario has no stored parameters yet and the
    /// caller should keep its defaults.
    pub fn fetch_parameters(&self) -> Result<Option<ParameterSet>, ApiError> {
        let url = self.url("parameters");
        tracing::debug!(%url, "fetching parameters");
        let response = self.http.get(&url).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check_status(response)?;
        Ok(Some(response.json()?))
    }

    /// Store the full parameter set and have the service recompute the
    /// forecast. Logical rejections come back as a non-`success` status in
    /// the body, not as an `Err`.
    pub fn update_parameters(&self, params: &ParameterSet) -> Result<UpdateResponse, ApiError> {
        let url = self.url("parameters/update");
        tracing::debug!(%url, "submitting parameters");
        let response = self.http.post(&url).json(params).send()?;
        let response = Self::check_status(response)?;
        Ok(response.json()?)
    }

    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ActorType;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn fetch_parameters_parses_the_stored_set() {
        let server = MockServer::start();
        let mut stored = ParameterSet::default();
        stored.initial_clients = 250;
        stored.set_growth_rate(ActorType::Client, 0, 20.0);
        let body = serde_json::to_value(&stored).unwrap();

        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/scenarios/1/parameters");
            then.status(200).json_body(body);
        });

        let client = ForecastClient::new(server.base_url(), 1).unwrap();
        let fetched = client.fetch_parameters().unwrap();

        mock.assert();
        assert_eq!(fetched, Some(stored));
    }

    #[test]
    fn fetch_parameters_maps_not_found_to_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/scenarios/7/parameters");
            then.status(404).json_body(json!({"detail": "Scenario not found"}));
        });

        let client = ForecastClient::new(server.base_url(), 7).unwrap();
        assert_eq!(client.fetch_parameters().unwrap(), None);
    }

    #[test]
    fn fetch_parameters_surfaces_server_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/scenarios/1/parameters");
            then.status(500).body("boom");
        });

        let client = ForecastClient::new(server.base_url(), 1).unwrap();
        match client.fetch_parameters() {
            Err(ApiError::Status { status: 500, body }) => assert_eq!(body, "boom"),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn update_parameters_sends_the_full_set_and_returns_the_summary() {
        let server = MockServer::start();
        let params = ParameterSet::default();

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/scenarios/1/parameters/update")
                .json_body(serde_json::to_value(&params).unwrap());
            then.status(200).json_body(json!({
                "status": "success",
                "message": "Parameters updated",
                "yearly_summary": [{"year": 1, "income": 24000.0}],
            }));
        });

        let client = ForecastClient::new(server.base_url(), 1).unwrap();
        let response = client.update_parameters(&params).unwrap();

        mock.assert();
        assert!(response.is_success());
        assert_eq!(response.message.as_deref(), Some("Parameters updated"));
        let summary = response.yearly_summary.unwrap();
        assert_eq!(summary[0]["income"], 24000.0);
    }

    #[test]
    fn update_parameters_carries_logical_rejections_in_the_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/scenarios/1/parameters/update");
            then.status(200)
                .json_body(json!({"status": "error", "message": "Invalid rate"}));
        });

        let client = ForecastClient::new(server.base_url(), 1).unwrap();
        let response = client.update_parameters(&ParameterSet::default()).unwrap();

        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("Invalid rate"));
        assert!(response.yearly_summary.is_none());
    }

    #[test]
    fn trailing_slashes_in_the_base_url_are_ignored() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/scenarios/1/parameters");
            then.status(404);
        });

        let client = ForecastClient::new(format!("{}//", server.base_url()), 1).unwrap();
        assert_eq!(client.fetch_parameters().unwrap(), None);
        mock.assert();
    }
}
