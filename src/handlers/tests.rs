//! Unit tests for the request-validation half of the authorizer.
//!
//! The gateway- and store-facing half is covered by the router tests in
//! tests/integration_api.rs, which inject a stub gateway.

use crate::domain::DomainError;
use crate::handlers::{validate_request, TransferCommand};

const SENDER: &str = "5d84ca00-c079-4577-9560-e1014086affe";
const RECIPIENT: &str = "8cca0453-8e84-4f3b-aa40-7fc9cd162a34";

#[test]
fn test_valid_request() {
    let command = TransferCommand::new(SENDER, RECIPIENT, "17.24", 1);
    let (sender, recipient, amount) = validate_request(&command).unwrap();

    assert_eq!(sender.to_string(), SENDER);
    assert_eq!(recipient.to_string(), RECIPIENT);
    assert_eq!(amount.value().to_string(), "17.24");
}

#[test]
fn test_malformed_sender_rejected() {
    let command = TransferCommand::new("not-an-id", RECIPIENT, "10", 1);
    assert_eq!(
        validate_request(&command).unwrap_err(),
        DomainError::InvalidIdentifier("sender account")
    );
}

#[test]
fn test_malformed_recipient_rejected() {
    let command = TransferCommand::new(SENDER, "", "10", 1);
    assert_eq!(
        validate_request(&command).unwrap_err(),
        DomainError::InvalidIdentifier("recipient account")
    );
}

#[test]
fn test_self_transfer_rejected_regardless_of_amount() {
    for amount in ["1", "10000", "not-even-a-number"] {
        let command = TransferCommand::new(SENDER, SENDER, amount, 1);
        assert_eq!(
            validate_request(&command).unwrap_err(),
            DomainError::SelfTransfer,
            "self transfer must be rejected before amount parsing"
        );
    }
}

#[test]
fn test_sub_minimum_amount_rejected() {
    for amount in ["0", "0.99", "-0.5"] {
        let command = TransferCommand::new(SENDER, RECIPIENT, amount, 1);
        assert!(matches!(
            validate_request(&command).unwrap_err(),
            DomainError::InvalidAmount(_)
        ));
    }
}

#[test]
fn test_identifier_checked_before_amount() {
    let command = TransferCommand::new("bogus", RECIPIENT, "0.1", 1);
    assert_eq!(
        validate_request(&command).unwrap_err(),
        DomainError::InvalidIdentifier("sender account")
    );
}
