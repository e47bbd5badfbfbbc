use crate::error::GatewayError;
use axum::http::StatusCode;
use eventia_shared::UserIn;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for forwarding requests to downstream services. One
/// pooled client is shared by all routes; every outbound call carries
/// an explicit timeout. No retries and no circuit breaking: a single
/// downstream failure is a single gateway failure.
#[derive(Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
}

impl ServiceClient {
    pub fn new(timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }

    /// Forward a credentials payload to a fixed downstream path
    /// (login/register) and relay the downstream status and JSON body.
    pub async fn forward_fixed(
        &self,
        base_url: &str,
        target: &str,
        payload: &UserIn,
    ) -> Result<(StatusCode, Value), GatewayError> {
        let url = format!("{}{}", base_url, target);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(GatewayError::from_downstream)?;

        Self::relay(response).await
    }

    /// Forward a GET to the downstream service, appending the
    /// prefix-stripped path remainder (and query string) verbatim.
    pub async fn forward_passthrough(
        &self,
        base_url: &str,
        remainder: &str,
        query: Option<&str>,
    ) -> Result<(StatusCode, Value), GatewayError> {
        let mut url = format!("{}/{}", base_url, remainder);
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::from_downstream)?;

        Self::relay(response).await
    }

    /// Relay the downstream response without reinterpretation: same
    /// status code, body re-emitted as JSON. A downstream body that is
    /// not JSON is an unexpected failure.
    async fn relay(response: reqwest::Response) -> Result<(StatusCode, Value), GatewayError> {
        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| GatewayError::Unexpected(e.to_string()))?;

        let body = response
            .json::<Value>()
            .await
            .map_err(GatewayError::from_downstream)?;

        Ok((status, body))
    }
}
