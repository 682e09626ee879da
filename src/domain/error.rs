//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Business rule violations raised by the transfer-authorization pipeline.
///
/// The `Display` messages are the terse, stable strings returned across the
/// service boundary; underlying causes stay in the logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier is not a well-formed account/transaction id
    #[error("invalid {0} id")]
    InvalidIdentifier(&'static str),

    /// Sender and recipient are the same account
    #[error("can't transfer money between the same account")]
    SelfTransfer,

    /// Amount failed validation (sub-minimum magnitude, scale, overflow)
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Account lookup returned an empty/garbage record
    #[error("invalid account")]
    InvalidAccount,

    /// Account has a close date set
    #[error("account is closed")]
    AccountClosed,

    /// Transfer would push the sender past their credit limit
    #[error("insufficient funds")]
    InsufficientFunds,
}

impl DomainError {
    /// Check if this is a client error (caller's fault, nothing to retry)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier(_)
                | Self::SelfTransfer
                | Self::InvalidAmount(_)
                | Self::InvalidAccount
                | Self::AccountClosed
                | Self::InsufficientFunds
        )
    }

    /// True for failures found by consulting account state rather than the
    /// request itself
    pub fn is_authorization_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAccount | Self::AccountClosed | Self::InsufficientFunds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_are_client_errors() {
        let errors = [
            DomainError::InvalidIdentifier("sender account"),
            DomainError::SelfTransfer,
            DomainError::InvalidAmount("too small".to_string()),
            DomainError::InvalidAccount,
            DomainError::AccountClosed,
            DomainError::InsufficientFunds,
        ];
        for err in errors {
            assert!(err.is_client_error(), "{err} should be a client error");
        }
    }

    #[test]
    fn test_authorization_subset() {
        assert!(DomainError::InsufficientFunds.is_authorization_error());
        assert!(DomainError::AccountClosed.is_authorization_error());
        assert!(DomainError::InvalidAccount.is_authorization_error());
        assert!(!DomainError::SelfTransfer.is_authorization_error());
        assert!(!DomainError::InvalidIdentifier("sender account").is_authorization_error());
    }

    #[test]
    fn test_stable_messages() {
        assert_eq!(
            DomainError::InvalidIdentifier("sender account").to_string(),
            "invalid sender account id"
        );
        assert_eq!(
            DomainError::InsufficientFunds.to_string(),
            "insufficient funds"
        );
        assert_eq!(DomainError::AccountClosed.to_string(), "account is closed");
    }
}
