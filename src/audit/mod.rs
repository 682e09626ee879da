//! Audit Publisher
//!
//! Best-effort, fire-and-forget emission of one structured event per
//! request outcome. The channel is a durable `audit_events` table; publish
//! failures are logged locally and swallowed so the audit path can never
//! block or fail the primary request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::OperationContext;

/// Sentinel recorded when a context field is absent.
const NONE: &str = "none";

/// Event severity: `info` for successful completions, `error` for
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One structured audit line.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub severity: Severity,
    pub path: String,
    pub correlation: String,
    pub actor: String,
    /// Failure message, present on error events only
    pub message: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Event for a request that completed successfully.
    pub fn info(context: &OperationContext) -> Self {
        Self::build(Severity::Info, context, None)
    }

    /// Event for a failed request, carrying the failure message.
    pub fn error(context: &OperationContext, message: impl Into<String>) -> Self {
        Self::build(Severity::Error, context, Some(message.into()))
    }

    fn build(severity: Severity, context: &OperationContext, message: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            path: context.path.clone(),
            correlation: context.correlation.clone().unwrap_or_else(|| NONE.to_string()),
            actor: context.subject.clone().unwrap_or_else(|| NONE.to_string()),
            message,
            occurred_at: Utc::now(),
        }
    }
}

/// Fire-and-forget publisher over the durable audit channel.
#[derive(Debug, Clone)]
pub struct AuditPublisher {
    pool: PgPool,
}

impl AuditPublisher {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Publish at most once. Returns immediately; the write happens on a
    /// spawned task and a failed write is logged and dropped.
    pub fn publish(&self, event: AuditEvent) {
        let pool = self.pool.clone();
        tokio::spawn(async move {
            if let Err(e) = write_event(&pool, &event).await {
                tracing::warn!(
                    event_id = %event.id,
                    severity = %event.severity,
                    error = %e,
                    "audit publish failed"
                );
            }
        });
    }
}

async fn write_event(pool: &PgPool, event: &AuditEvent) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO audit_events (id, severity, path, correlation, actor, message, occurred_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(event.id)
    .bind(event.severity.as_str())
    .bind(&event.path)
    .bind(&event.correlation)
    .bind(&event.actor)
    .bind(&event.message)
    .bind(event.occurred_at)
    .execute(pool)
    .await?;

    Ok(())
}
