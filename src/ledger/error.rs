//! Ledger Store Errors

/// Errors that can occur in the ledger store.
///
/// Every failed statement carries the operation name and the underlying
/// cause for logging; across the service boundary only the terse category
/// is reported.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger {operation} failed: {source}")]
    Persistence {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl LedgerError {
    pub(crate) fn persistence(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Persistence { operation, source }
    }

    /// Name of the failed operation, for logs and audit context
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Persistence { operation, .. } => operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_name_in_message() {
        let err = LedgerError::persistence("create", sqlx::Error::PoolClosed);
        assert_eq!(err.operation(), "create");
        assert!(err.to_string().starts_with("ledger create failed"));
    }
}
