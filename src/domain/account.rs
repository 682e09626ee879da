//! Account snapshot
//!
//! Read-only view of an account as returned by the external account
//! service. This service never owns or caches account state; every
//! authorization decision re-fetches a fresh snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Account state fetched from the account service.
///
/// Wire shape is `{pk, balance, limit, closeDate|null}`. Fields default to
/// their zero values so a garbage record deserializes to an empty primary
/// key and is caught by [`AccountSnapshot::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Primary key; empty means the lookup returned an empty/garbage record
    #[serde(rename = "pk", default)]
    pub id: String,

    #[serde(default)]
    pub balance: Decimal,

    /// Maximum amount the balance may go negative by
    #[serde(rename = "limit", default)]
    pub credit_limit: Decimal,

    /// Presence means the account is closed
    #[serde(rename = "closeDate", default)]
    pub close_date: Option<DateTime<Utc>>,
}

impl AccountSnapshot {
    /// Structural eligibility check for taking part in a transfer.
    ///
    /// Never looks at the balance; funds are checked separately via
    /// [`AccountSnapshot::can_cover`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::InvalidAccount);
        }

        if self.close_date.is_some() {
            return Err(DomainError::AccountClosed);
        }

        Ok(())
    }

    /// Funds rule: the projected balance after sending `amount` must not
    /// drop below the negative of the credit limit.
    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance - amount >= -self.credit_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn open_account(balance: Decimal, credit_limit: Decimal) -> AccountSnapshot {
        AccountSnapshot {
            id: "5d84ca00-c079-4577-9560-e1014086affe".to_string(),
            balance,
            credit_limit,
            close_date: None,
        }
    }

    #[test]
    fn test_valid_account() {
        assert!(open_account(dec!(100), dec!(50)).validate().is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        let account = AccountSnapshot {
            id: String::new(),
            balance: dec!(100),
            credit_limit: dec!(50),
            close_date: None,
        };
        assert_eq!(account.validate(), Err(DomainError::InvalidAccount));
    }

    #[test]
    fn test_closed_account_rejected() {
        let mut account = open_account(dec!(100), dec!(50));
        account.close_date = Some(Utc::now());
        assert_eq!(account.validate(), Err(DomainError::AccountClosed));
    }

    #[test]
    fn test_funds_rule_concrete_scenarios() {
        // balance 10, limit 5, amount 20 -> projected -10 < -5 -> rejected
        assert!(!open_account(dec!(10), dec!(5)).can_cover(dec!(20)));

        // balance 10, limit 20, amount 20 -> projected -10 >= -20 -> accepted
        assert!(open_account(dec!(10), dec!(20)).can_cover(dec!(20)));

        // balance 100, limit 50, amount 120 -> projected -20 >= -50 -> accepted
        assert!(open_account(dec!(100), dec!(50)).can_cover(dec!(120)));
    }

    #[test]
    fn test_funds_rule_boundary() {
        // Projected balance exactly at the negative limit is allowed
        assert!(open_account(dec!(0), dec!(50)).can_cover(dec!(50)));
        assert!(!open_account(dec!(0), dec!(50)).can_cover(dec!(50.01)));
    }

    #[test]
    fn test_wire_deserialization() {
        let snapshot: AccountSnapshot = serde_json::from_str(
            r#"{"pk":"8cca0453-8e84-4f3b-aa40-7fc9cd162a34","balance":"17.24","limit":"100","closeDate":null}"#,
        )
        .unwrap();
        assert_eq!(snapshot.balance, dec!(17.24));
        assert_eq!(snapshot.credit_limit, dec!(100));
        assert!(snapshot.close_date.is_none());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_garbage_record_deserializes_to_invalid() {
        // Missing fields fall back to zero values; the empty pk is what
        // flags the record as invalid downstream
        let snapshot: AccountSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.id.is_empty());
        assert_eq!(snapshot.validate(), Err(DomainError::InvalidAccount));
    }
}
