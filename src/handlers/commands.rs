//! Command definitions
//!
//! Commands represent intentions to change the ledger.

use serde::{Deserialize, Serialize};

/// Command to record a transfer between two accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferCommand {
    /// Opaque sender account identifier, validated by the authorizer
    pub sender_account_id: String,
    /// Opaque recipient account identifier
    pub recipient_account_id: String,
    /// Amount to transfer (as string for precise decimal)
    pub amount: String,
    /// Transaction type id; the label is resolved at read time
    pub type_id: i32,
}

impl TransferCommand {
    pub fn new(
        sender_account_id: impl Into<String>,
        recipient_account_id: impl Into<String>,
        amount: impl Into<String>,
        type_id: i32,
    ) -> Self {
        Self {
            sender_account_id: sender_account_id.into(),
            recipient_account_id: recipient_account_id.into(),
            amount: amount.into(),
            type_id,
        }
    }
}
