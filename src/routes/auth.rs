//! Authentication endpoints, mounted under `/auth`.

use super::{method_not_allowed, GroupIndex};
use actix_web::{web, Responder};

#[utoipa::path(
    get,
    path = "/auth",
    tag = "auth",
    operation_id = "auth_index",
    responses((status = 200, body = GroupIndex))
)]
#[tracing::instrument(name = "Auth index.")]
pub async fn index() -> impl Responder {
    web::Json(GroupIndex::available("auth"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // "/auth" and "/auth/"
    cfg.service(
        web::resource(["", "/"])
            .route(web::get().to(index))
            .default_service(web::route().to(method_not_allowed)),
    );
}
