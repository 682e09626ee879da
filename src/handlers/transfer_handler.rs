//! Transfer Authorizer
//!
//! The core decision point: validates a transfer request, consults the
//! account service, enforces the funds/limit invariants, mints the
//! immutable record and hands it to the ledger store.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    parse_identifier, DomainError, OperationContext, Transaction, TransferAmount,
};
use crate::error::AppError;
use crate::gateway::AccountGateway;
use crate::ledger::LedgerStore;

use super::TransferCommand;

/// Orchestrates gateway lookup, account validation and the funds check.
pub struct TransferAuthorizer {
    gateway: Arc<dyn AccountGateway>,
    ledger: LedgerStore,
}

impl TransferAuthorizer {
    pub fn new(gateway: Arc<dyn AccountGateway>, ledger: LedgerStore) -> Self {
        Self { gateway, ledger }
    }

    /// Decide whether the transfer may proceed and, if so, persist the
    /// minted record.
    ///
    /// No state is written on any failure path; the only durable write is
    /// the final ledger insert. The account service never gets a
    /// compensating call on persistence failure because it was never
    /// mutated.
    pub async fn execute(
        &self,
        command: TransferCommand,
        context: &OperationContext,
    ) -> Result<Transaction, AppError> {
        // Request-local checks run before any outbound call
        let (sender_id, recipient_id, amount) = validate_request(&command)?;

        let sender = self
            .gateway
            .fetch(sender_id, &context.token, context.correlation.as_deref())
            .await?;
        sender.validate()?;

        if !sender.can_cover(amount.value()) {
            return Err(DomainError::InsufficientFunds.into());
        }

        // Recipient eligibility is structural only; limits apply to the
        // sender side alone
        let recipient = self
            .gateway
            .fetch(recipient_id, &context.token, context.correlation.as_deref())
            .await?;
        recipient.validate()?;

        let transaction = Transaction::new(sender_id, recipient_id, amount.value(), command.type_id);

        self.ledger.create(&transaction).await?;

        tracing::info!(
            transaction_id = %transaction.id,
            sender_id = %transaction.sender_id,
            recipient_id = %transaction.recipient_id,
            "transfer recorded"
        );

        Ok(transaction)
    }
}

/// Pure request validation: well-formed identifiers, distinct accounts,
/// transferable amount. Returns the parsed pieces the orchestration needs.
pub fn validate_request(
    command: &TransferCommand,
) -> Result<(Uuid, Uuid, TransferAmount), DomainError> {
    let sender_id = parse_identifier(&command.sender_account_id, "sender account")?;
    let recipient_id = parse_identifier(&command.recipient_account_id, "recipient account")?;

    if sender_id == recipient_id {
        return Err(DomainError::SelfTransfer);
    }

    let amount: TransferAmount = command.amount.parse()?;

    Ok((sender_id, recipient_id, amount))
}
