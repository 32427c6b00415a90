pub mod admin;
pub mod auth;
pub mod docs;
pub mod health_checks;
pub mod teacher;

pub use health_checks::*;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Index document every route group serves at its prefix.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GroupIndex {
    pub group: String,
    pub status: String,
}

impl GroupIndex {
    pub fn available(group: &str) -> Self {
        Self {
            group: group.to_string(),
            status: "available".to_string(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(root))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(health))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(web::scope("/auth").configure(auth::configure))
        .service(web::scope("/admin").configure(admin::configure))
        .service(web::scope("/teacher").configure(teacher::configure));
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "detail": "Not Found" }))
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({ "detail": "Method Not Allowed" }))
}
