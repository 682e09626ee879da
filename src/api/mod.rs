//! API module
//!
//! HTTP API endpoints and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use crate::audit::AuditPublisher;
use crate::gateway::AccountGateway;

pub mod middleware;
pub mod routes;

pub use routes::create_router;

/// Long-lived handles injected into each component at construction; no
/// ambient/static state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub gateway: Arc<dyn AccountGateway>,
    pub audit: AuditPublisher,
}

impl AppState {
    pub fn new(pool: PgPool, gateway: Arc<dyn AccountGateway>) -> Self {
        let audit = AuditPublisher::new(pool.clone());
        Self {
            pool,
            gateway,
            audit,
        }
    }
}
