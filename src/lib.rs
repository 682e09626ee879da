//! tx_ledger Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod audit;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod ledger;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use domain::{AccountSnapshot, DomainError, OperationContext, Transaction, TransactionType};
pub use gateway::{AccountGateway, GatewayError, HttpAccountGateway};
pub use ledger::{Direction, LedgerStore};
