use crate::configuration::Settings;
use crate::health::{HealthChecker, HealthResponse};
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub message: String,
    pub status: String,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Service is running", body = ServiceStatus))
)]
#[tracing::instrument(name = "Service status.", skip(settings))]
pub async fn root(settings: web::Data<Settings>) -> impl Responder {
    web::Json(ServiceStatus {
        message: format!("{} API", settings.app_name),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
#[tracing::instrument(name = "Health check.", skip(checker))]
pub async fn health(checker: web::Data<HealthChecker>) -> HttpResponse {
    let report = checker.check().await;

    if report.is_healthy() {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
