//! Domain module
//!
//! Core domain types and business logic.

pub mod account;
pub mod amount;
pub mod context;
pub mod error;
pub mod transaction;

pub use account::AccountSnapshot;
pub use amount::{AmountError, TransferAmount};
pub use context::OperationContext;
pub use error::DomainError;
pub use transaction::{parse_identifier, LedgerEntry, Transaction, TransactionType};

impl From<AmountError> for DomainError {
    fn from(err: AmountError) -> Self {
        DomainError::InvalidAmount(err.to_string())
    }
}
