use super::models::{DatabaseState, HealthResponse};
use crate::db::DocumentStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HealthChecker {
    store: Arc<dyn DocumentStore>,
    check_timeout: Duration,
}

impl HealthChecker {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            check_timeout: CHECK_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, check_timeout: Duration) -> Self {
        self.check_timeout = check_timeout;
        self
    }

    pub async fn check(&self) -> HealthResponse {
        HealthResponse::new(self.check_database().await)
    }

    #[tracing::instrument(name = "Check database health", skip(self))]
    async fn check_database(&self) -> DatabaseState {
        match timeout(self.check_timeout, self.store.ping()).await {
            Ok(Ok(())) => DatabaseState::Connected,
            Ok(Err(e)) => {
                tracing::error!("Database health check failed: {}", e);
                DatabaseState::Disconnected
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.check_timeout.as_millis() as u64,
                    "Database health check timed out"
                );
                DatabaseState::Disconnected
            }
        }
    }
}
