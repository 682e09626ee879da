//! Ledger Store module
//!
//! Durable table of transaction records. CRUD only; the business
//! invariants live in the transfer authorizer.

mod error;
mod repository;

pub use error::LedgerError;
pub use repository::{Direction, LedgerStore};
