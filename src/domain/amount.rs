//! Transfer amount type
//!
//! Domain primitive for transfer amounts with business rule validation.
//! Amounts are validated at construction time, so invalid values cannot
//! exist in the system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum allowed magnitude (1 trillion)
const MAX_MAGNITUDE: &str = "1000000000000";

/// Maximum decimal places
const MAX_SCALE: u32 = 8;

/// TransferAmount represents a validated transfer quantity.
///
/// # Invariants
/// - Magnitude is at least 1 (the minimum transferable unit); the sign is
///   the direction convention and is preserved
/// - Maximum 8 decimal places
/// - Magnitude never exceeds 1 trillion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransferAmount(Decimal);

/// Errors that can occur when creating a TransferAmount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("magnitude must be at least 1 (got {0})")]
    BelowMinimum(Decimal),

    #[error("too many decimal places (max {MAX_SCALE}, got {0})")]
    TooManyDecimals(u32),

    #[error("amount exceeds maximum allowed value ({MAX_MAGNITUDE})")]
    Overflow,

    #[error("unparseable amount: {0}")]
    ParseError(String),
}

impl TransferAmount {
    /// Create a new TransferAmount with validation.
    ///
    /// # Errors
    /// - `AmountError::BelowMinimum` if the magnitude is below 1
    /// - `AmountError::TooManyDecimals` if more than 8 decimal places
    /// - `AmountError::Overflow` if the magnitude exceeds 1 trillion
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.abs() < Decimal::ONE {
            return Err(AmountError::BelowMinimum(value));
        }

        if value.scale() > MAX_SCALE {
            return Err(AmountError::TooManyDecimals(value.scale()));
        }

        let max = Decimal::from_str(MAX_MAGNITUDE).expect("Invalid MAX_MAGNITUDE constant");
        if value.abs() > max {
            return Err(AmountError::Overflow);
        }

        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for TransferAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransferAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s).map_err(|e| AmountError::ParseError(e.to_string()))?;
        TransferAmount::new(decimal)
    }
}

impl TryFrom<String> for TransferAmount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TransferAmount::from_str(&value)
    }
}

impl From<TransferAmount> for String {
    fn from(amount: TransferAmount) -> Self {
        amount.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_whole_unit_accepted() {
        let amount = TransferAmount::new(dec!(1));
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), dec!(1));
    }

    #[test]
    fn test_zero_rejected() {
        let amount = TransferAmount::new(Decimal::ZERO);
        assert!(matches!(amount, Err(AmountError::BelowMinimum(_))));
    }

    #[test]
    fn test_sub_unit_magnitude_rejected() {
        assert!(matches!(
            TransferAmount::new(dec!(0.99)),
            Err(AmountError::BelowMinimum(_))
        ));
        assert!(matches!(
            TransferAmount::new(dec!(-0.5)),
            Err(AmountError::BelowMinimum(_))
        ));
    }

    #[test]
    fn test_negative_with_unit_magnitude_accepted() {
        // Sign is the direction convention; only the magnitude is bounded
        let amount = TransferAmount::new(dec!(-17.24));
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), dec!(-17.24));
    }

    #[test]
    fn test_too_many_decimals() {
        // 1.123456789 has 9 decimal places
        let amount = TransferAmount::new(Decimal::new(1_123456789, 9));
        assert!(matches!(amount, Err(AmountError::TooManyDecimals(9))));
    }

    #[test]
    fn test_max_decimals_ok() {
        let amount = TransferAmount::new(Decimal::new(1_12345678, 8));
        assert!(amount.is_ok());
    }

    #[test]
    fn test_overflow() {
        let value = Decimal::from_str("1000000000001").unwrap();
        assert!(matches!(
            TransferAmount::new(value),
            Err(AmountError::Overflow)
        ));
    }

    #[test]
    fn test_max_value_ok() {
        let value = Decimal::from_str("1000000000000").unwrap();
        assert!(TransferAmount::new(value).is_ok());
    }

    #[test]
    fn test_from_str() {
        let amount: Result<TransferAmount, _> = "123.456".parse();
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), dec!(123.456));
    }

    #[test]
    fn test_from_str_garbage() {
        let amount: Result<TransferAmount, _> = "seventeen".parse();
        assert!(matches!(amount, Err(AmountError::ParseError(_))));
    }
}
