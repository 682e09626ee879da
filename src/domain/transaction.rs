//! Ledger record types
//!
//! The immutable transaction record, its reference type, and the joined
//! read model returned by listings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainError;

/// A money transfer recorded in the ledger.
///
/// Minted once by the transfer authorizer after all checks pass and never
/// mutated afterwards; the only lifecycle operations are delete-by-id and
/// bulk delete-by-sender. The type label is resolved lazily at read time
/// via the `transaction_type` join, not stored redundantly on write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub type_id: i32,
}

impl Transaction {
    /// Mint a new record with a fresh id and the current server timestamp.
    pub fn new(sender_id: Uuid, recipient_id: Uuid, amount: Decimal, type_id: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            recipient_id,
            amount,
            date: Utc::now(),
            type_id,
        }
    }
}

/// Read-only reference set of transaction kinds, e.g. `1 -> "card-payment"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TransactionType {
    pub id: i32,
    pub label: String,
}

/// A transaction as returned by listings, with its type resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub transaction_type: TransactionType,
}

/// Parse an opaque identifier into a well-formed account/transaction id.
///
/// `role` names the identifier in the error message ("sender account",
/// "transaction", ...).
pub fn parse_identifier(value: &str, role: &'static str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|_| DomainError::InvalidIdentifier(role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mint_assigns_fresh_id_and_date() {
        let sender = Uuid::new_v4();
        let recipient = Uuid::new_v4();

        let a = Transaction::new(sender, recipient, dec!(17.24), 1);
        let b = Transaction::new(sender, recipient, dec!(17.24), 1);

        assert_ne!(a.id, b.id);
        assert_eq!(a.sender_id, sender);
        assert_eq!(a.recipient_id, recipient);
        assert_eq!(a.amount, dec!(17.24));
        assert_eq!(a.type_id, 1);
        assert!(a.date <= Utc::now());
    }

    #[test]
    fn test_parse_identifier() {
        let id = parse_identifier("5d84ca00-c079-4577-9560-e1014086affe", "sender account");
        assert!(id.is_ok());

        let err = parse_identifier("not-a-uuid", "sender account").unwrap_err();
        assert_eq!(err, DomainError::InvalidIdentifier("sender account"));
        assert_eq!(err.to_string(), "invalid sender account id");
    }

    #[test]
    fn test_transaction_type_round_trip() {
        let t = TransactionType {
            id: 1,
            label: "card-payment".to_string(),
        };
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"id":1,"label":"card-payment"}"#);
    }
}
