//! Account Gateway Client
//!
//! Fetches account snapshots from the external account service. Owns no
//! state: no caching and no retries, so every authorization decision sees
//! a fresh balance.

use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

use crate::domain::AccountSnapshot;

/// Source of account snapshots. Seam for swapping the HTTP client out in
/// tests.
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Fetch the current snapshot for `account_id`, forwarding the
    /// caller's bearer credential and correlation id.
    async fn fetch(
        &self,
        account_id: Uuid,
        credential: &str,
        correlation: Option<&str>,
    ) -> Result<AccountSnapshot, GatewayError>;
}

/// Errors surfaced by an account lookup. All of them are fatal for the
/// request being authorized; the caller does not retry.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Transport failure, including the bounded-timeout expiry
    #[error("account service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response; the body is kept as diagnostic text
    #[error("account service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// 200 response whose body was not a valid account snapshot
    #[error("account service response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP implementation talking to the account service.
pub struct HttpAccountGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAccountGateway {
    /// Build a gateway with a bounded per-request timeout.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl AccountGateway for HttpAccountGateway {
    async fn fetch(
        &self,
        account_id: Uuid,
        credential: &str,
        correlation: Option<&str>,
    ) -> Result<AccountSnapshot, GatewayError> {
        let url = format!("{}/account/{}", self.base_url, account_id);

        let mut request = self.client.get(&url).bearer_auth(credential);
        if let Some(correlation) = correlation {
            request = request.header("Correlation", correlation);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_construction() {
        let gateway = HttpAccountGateway::new(
            "http://account-api:8080/api/v1".to_string(),
            Duration::from_secs(5),
        );
        assert!(gateway.is_ok());
    }

    #[test]
    fn test_status_error_keeps_diagnostic_body() {
        let err = GatewayError::Status {
            status: 404,
            body: "account not found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("account not found"));
    }

    #[test]
    fn test_decode_error_from_bad_body() {
        let result: Result<AccountSnapshot, serde_json::Error> = serde_json::from_str("not json");
        let err = GatewayError::from(result.unwrap_err());
        assert!(matches!(err, GatewayError::Decode(_)));
    }
}
