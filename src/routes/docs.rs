//! OpenAPI document and Swagger UI.
//!
//! The document carries the configured application name and description so
//! `/openapi.json` and `/docs/` describe the running deployment.

use crate::configuration::Settings;
use crate::health::{DatabaseState, HealthResponse, HealthStatus};
use crate::routes::{GroupIndex, ServiceStatus};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health_checks::root,
        crate::routes::health_checks::health,
        crate::routes::auth::index,
        crate::routes::admin::index,
        crate::routes::teacher::index,
    ),
    components(schemas(ServiceStatus, HealthResponse, HealthStatus, DatabaseState, GroupIndex)),
    tags(
        (name = "service", description = "Liveness"),
        (name = "auth", description = "Authentication"),
        (name = "admin", description = "Administration"),
        (name = "teacher", description = "Exam paper generation"),
    )
)]
pub struct ApiDoc;

pub fn openapi(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = settings.app_name.clone();
    doc.info.description = Some(settings.app_description.clone());
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
}

pub fn swagger_ui(openapi: utoipa::openapi::OpenApi) -> SwaggerUi {
    SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", openapi)
}
