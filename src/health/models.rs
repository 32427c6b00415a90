use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub database: DatabaseState,
    pub api: String,
}

impl HealthResponse {
    pub fn new(database: DatabaseState) -> Self {
        let status = match database {
            DatabaseState::Connected => HealthStatus::Healthy,
            DatabaseState::Disconnected => HealthStatus::Unhealthy,
        };

        Self {
            status,
            database,
            api: "operational".to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}
