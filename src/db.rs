//! Database module
//!
//! Connection and schema verification utilities.

use sqlx::PgPool;

/// Simple connectivity check
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Check if required tables exist
pub async fn check_schema(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let required_tables = vec!["account_transaction", "transaction_type", "audit_events"];

    for table in required_tables {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )
            "#,
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required table '{}' does not exist", table);
            return Ok(false);
        }
    }

    if !check_reference_types(pool).await? {
        return Ok(false);
    }

    Ok(true)
}

/// The transaction-type reference set is read-only for this service and
/// must be seeded before startup.
async fn check_reference_types(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transaction_type")
        .fetch_one(pool)
        .await?;

    if count == 0 {
        tracing::error!("transaction_type reference set is empty. Please run database seed.");
        return Ok(false);
    }

    tracing::info!("transaction_type reference set verified ({count} rows)");
    Ok(true)
}
