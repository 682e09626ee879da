//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::DomainError;
use crate::gateway::GatewayError;
use crate::ledger::LedgerError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
///
/// Validation and authorization failures are client errors with no state
/// changed; upstream and persistence failures are server errors. Only a
/// terse, stable message and category cross the boundary; causes are
/// logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request outside the domain rules (e.g. bad direction)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Business rule violation (validation or authorization)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Account gateway unreachable, timed out, or non-200
    #[error("account service unavailable")]
    Upstream(#[from] GatewayError),

    /// Storage statement/connection failure. Can only occur after all
    /// checks passed, so the caller must treat it as "transfer not
    /// recorded".
    #[error("transfer not recorded")]
    Persistence(#[from] LedgerError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", Some(msg.clone()))
            }

            AppError::Domain(domain_err) => match domain_err {
                DomainError::InvalidIdentifier(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_identifier", None)
                }
                DomainError::SelfTransfer => (StatusCode::BAD_REQUEST, "self_transfer", None),
                DomainError::InvalidAmount(msg) => {
                    (StatusCode::BAD_REQUEST, "invalid_amount", Some(msg.clone()))
                }
                DomainError::InvalidAccount => {
                    (StatusCode::BAD_REQUEST, "invalid_account", None)
                }
                DomainError::AccountClosed => (StatusCode::BAD_REQUEST, "account_closed", None),
                DomainError::InsufficientFunds => {
                    (StatusCode::BAD_REQUEST, "insufficient_funds", None)
                }
            },

            AppError::Upstream(e) => {
                tracing::error!(error = ?e, "account gateway failure");
                (StatusCode::BAD_GATEWAY, "upstream_unavailable", None)
            }

            AppError::Persistence(e) => {
                tracing::error!(error = ?e, operation = e.operation(), "ledger failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "persistence_failure", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terse_upstream_message() {
        let err = AppError::Upstream(GatewayError::Status {
            status: 503,
            body: "internal stack trace and secrets".to_string(),
        });
        // Diagnostic body stays in the logs, not in the boundary message
        assert_eq!(err.to_string(), "account service unavailable");
    }

    #[test]
    fn test_persistence_message() {
        let err = AppError::Persistence(LedgerError::persistence(
            "create",
            sqlx::Error::PoolClosed,
        ));
        assert_eq!(err.to_string(), "transfer not recorded");
    }

    #[test]
    fn test_domain_errors_pass_through() {
        let err = AppError::from(DomainError::SelfTransfer);
        assert_eq!(
            err.to_string(),
            "can't transfer money between the same account"
        );
    }
}
