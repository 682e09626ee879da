//! Ledger Store Repository
//!
//! All statements run against the shared bounded pool; each acquires and
//! releases a connection per statement with no higher-level locking.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::{LedgerEntry, Transaction, TransactionType};

use super::LedgerError;

/// Which side of a transaction a listing matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sender,
    Recipient,
    /// Union of both sides. A transaction can never match twice because
    /// self-transfers are rejected at authorization time.
    All,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Sender => "sender",
            Direction::Recipient => "recipient",
            Direction::All => "all",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sender" => Ok(Direction::Sender),
            "recipient" => Ok(Direction::Recipient),
            "all" => Ok(Direction::All),
            other => Err(format!(
                "invalid direction '{other}', supported: 'sender', 'recipient', 'all'"
            )),
        }
    }
}

/// Store for transaction records and the transaction-type reference set.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    pool: PgPool,
}

impl LedgerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one record. A type id with no matching `transaction_type`
    /// row fails here; referential integrity is delegated to the store.
    pub async fn create(&self, transaction: &Transaction) -> Result<(), LedgerError> {
        sqlx::query(
            r#"
            INSERT INTO account_transaction (id, sender_id, recipient_id, amount, t_date, fk_t_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(transaction.id)
        .bind(transaction.sender_id)
        .bind(transaction.recipient_id)
        .bind(transaction.amount)
        .bind(transaction.date)
        .bind(transaction.type_id)
        .execute(&self.pool)
        .await
        .map_err(|e| LedgerError::persistence("create", e))?;

        Ok(())
    }

    /// List transactions touching `account_id`, with the type label
    /// resolved via join. An empty result is an empty Vec, not an error;
    /// the handler layer maps it to a no-content outcome.
    pub async fn list_for_account(
        &self,
        account_id: Uuid,
        direction: Direction,
    ) -> Result<Vec<LedgerEntry>, LedgerError> {
        let query = match direction {
            Direction::Sender => LIST_QUERY_SENDER,
            Direction::Recipient => LIST_QUERY_RECIPIENT,
            Direction::All => LIST_QUERY_ALL,
        };

        let rows = sqlx::query(query)
            .bind(account_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| LedgerError::persistence("list", e))?;

        // Best-effort degradation: a row that fails to decode is logged
        // and skipped rather than aborting the whole listing.
        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            match decode_entry(row) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(error = %e, "skipping undecodable ledger row"),
            }
        }

        Ok(entries)
    }

    /// Delete at most one record. Deleting a nonexistent id is not an
    /// error.
    pub async fn delete(&self, transaction_id: Uuid) -> Result<(), LedgerError> {
        sqlx::query("DELETE FROM account_transaction WHERE id = $1")
            .bind(transaction_id)
            .execute(&self.pool)
            .await
            .map_err(|e| LedgerError::persistence("delete", e))?;

        Ok(())
    }

    /// Delete every record where `account_id` is the sender. Rows where
    /// the account is only the recipient are left untouched; the
    /// asymmetry is intentional.
    pub async fn delete_for_account(&self, account_id: Uuid) -> Result<(), LedgerError> {
        sqlx::query("DELETE FROM account_transaction WHERE sender_id = $1")
            .bind(account_id)
            .execute(&self.pool)
            .await
            .map_err(|e| LedgerError::persistence("delete_for_account", e))?;

        Ok(())
    }

    /// Full read of the reference set, ordered by id for determinism.
    pub async fn list_types(&self) -> Result<Vec<TransactionType>, LedgerError> {
        sqlx::query_as::<_, TransactionType>(
            "SELECT id, label FROM transaction_type ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LedgerError::persistence("list_types", e))
    }
}

const LIST_QUERY_SENDER: &str = r#"
    SELECT t.id, t.sender_id, t.recipient_id, t.amount, t.t_date, tt.id AS type_id, tt.label
    FROM account_transaction AS t
    JOIN transaction_type AS tt ON t.fk_t_type = tt.id
    WHERE t.sender_id = $1
"#;

const LIST_QUERY_RECIPIENT: &str = r#"
    SELECT t.id, t.sender_id, t.recipient_id, t.amount, t.t_date, tt.id AS type_id, tt.label
    FROM account_transaction AS t
    JOIN transaction_type AS tt ON t.fk_t_type = tt.id
    WHERE t.recipient_id = $1
"#;

const LIST_QUERY_ALL: &str = r#"
    SELECT t.id, t.sender_id, t.recipient_id, t.amount, t.t_date, tt.id AS type_id, tt.label
    FROM account_transaction AS t
    JOIN transaction_type AS tt ON t.fk_t_type = tt.id
    WHERE t.sender_id = $1 OR t.recipient_id = $1
"#;

fn decode_entry(row: &PgRow) -> Result<LedgerEntry, sqlx::Error> {
    Ok(LedgerEntry {
        id: row.try_get("id")?,
        sender_id: row.try_get("sender_id")?,
        recipient_id: row.try_get("recipient_id")?,
        amount: row.try_get("amount")?,
        date: row.try_get("t_date")?,
        transaction_type: TransactionType {
            id: row.try_get("type_id")?,
            label: row.try_get("label")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("sender".parse::<Direction>(), Ok(Direction::Sender));
        assert_eq!("recipient".parse::<Direction>(), Ok(Direction::Recipient));
        assert_eq!("all".parse::<Direction>(), Ok(Direction::All));
        assert!("outgoing".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_round_trip() {
        for direction in [Direction::Sender, Direction::Recipient, Direction::All] {
            assert_eq!(direction.as_str().parse::<Direction>(), Ok(direction));
        }
    }
}
