//! API Routes
//!
//! Thin adapter between the HTTP representation and the core pipeline.
//! After the authorizer (or store) returns, each handler hands the outcome
//! to the audit hook, never inside the authorization path itself.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::audit::{AuditEvent, AuditPublisher};
use crate::domain::{parse_identifier, LedgerEntry, OperationContext, Transaction, TransactionType};
use crate::error::AppError;
use crate::handlers::{TransferAuthorizer, TransferCommand};
use crate::ledger::{Direction, LedgerStore};

use super::AppState;

// =========================================================================
// Request types
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTransferRequest {
    pub sender_account_id: String,
    pub recipient_account_id: String,
    pub amount: String,
    pub type_id: i32,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(create_transfer))
        // :id is the account id here and the transaction id below; the
        // router requires one name per position
        .route("/transactions/:id/:direction", get(list_transactions))
        .route("/transactions/:id", delete(delete_transaction))
        .route("/accounts/:account_id/transactions", delete(delete_for_account))
        .route("/transaction-types", get(list_types))
}

/// Publish the audit event for the request outcome, then convert the
/// outcome into the HTTP response.
fn finish<T: IntoResponse>(
    audit: &AuditPublisher,
    context: &OperationContext,
    result: Result<T, AppError>,
) -> Response {
    match result {
        Ok(value) => {
            audit.publish(AuditEvent::info(context));
            value.into_response()
        }
        Err(err) => {
            audit.publish(AuditEvent::error(context, err.to_string()));
            err.into_response()
        }
    }
}

// =========================================================================
// POST /transactions
// =========================================================================

/// Authorize and record a new transfer
async fn create_transfer(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Json(request): Json<CreateTransferRequest>,
) -> Response {
    let authorizer =
        TransferAuthorizer::new(state.gateway.clone(), LedgerStore::new(state.pool.clone()));

    let command = TransferCommand {
        sender_account_id: request.sender_account_id,
        recipient_account_id: request.recipient_account_id,
        amount: request.amount,
        type_id: request.type_id,
    };

    let result: Result<_, AppError> = authorizer
        .execute(command, &context)
        .await
        .map(|transaction: Transaction| (StatusCode::CREATED, Json(transaction)));

    finish(&state.audit, &context, result)
}

// =========================================================================
// GET /transactions/:account_id/:direction
// =========================================================================

/// List transactions for an account, where it was sender, recipient or
/// either. An account with no transactions yields 204, not an error.
async fn list_transactions(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path((account_id, direction)): Path<(String, String)>,
) -> Response {
    let result = list_transactions_inner(&state, &account_id, &direction).await;
    finish(&state.audit, &context, result)
}

async fn list_transactions_inner(
    state: &AppState,
    account_id: &str,
    direction: &str,
) -> Result<Response, AppError> {
    let account_id = parse_identifier(account_id, "account")?;
    let direction: Direction = direction.parse().map_err(AppError::InvalidRequest)?;

    let entries: Vec<LedgerEntry> = LedgerStore::new(state.pool.clone())
        .list_for_account(account_id, direction)
        .await?;

    if entries.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok((StatusCode::OK, Json(entries)).into_response())
}

// =========================================================================
// DELETE /transactions/:transaction_id
// =========================================================================

/// Delete one transaction; deleting a nonexistent id succeeds
async fn delete_transaction(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(transaction_id): Path<String>,
) -> Response {
    let result: Result<StatusCode, AppError> = async {
        let transaction_id = parse_identifier(&transaction_id, "transaction")?;
        LedgerStore::new(state.pool.clone())
            .delete(transaction_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
    .await;

    finish(&state.audit, &context, result)
}

// =========================================================================
// DELETE /accounts/:account_id/transactions
// =========================================================================

/// Delete all transactions where the given account is the sender.
/// Transactions where it is only the recipient are kept.
async fn delete_for_account(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    Path(account_id): Path<String>,
) -> Response {
    let result: Result<StatusCode, AppError> = async {
        let account_id = parse_identifier(&account_id, "account")?;
        LedgerStore::new(state.pool.clone())
            .delete_for_account(account_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
    .await;

    finish(&state.audit, &context, result)
}

// =========================================================================
// GET /transaction-types
// =========================================================================

/// Full transaction-type reference set, ordered by id
async fn list_types(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
) -> Response {
    let result: Result<_, AppError> = LedgerStore::new(state.pool.clone())
        .list_types()
        .await
        .map(|types: Vec<TransactionType>| (StatusCode::OK, Json(types)))
        .map_err(AppError::from);

    finish(&state.audit, &context, result)
}
