//! Teacher workspace, mounted under `/teacher`. Paper generation endpoints
//! attach here.

use super::{method_not_allowed, GroupIndex};
use actix_web::{web, Responder};

#[utoipa::path(
    get,
    path = "/teacher",
    tag = "teacher",
    operation_id = "teacher_index",
    responses((status = 200, body = GroupIndex))
)]
#[tracing::instrument(name = "Teacher index.")]
pub async fn index() -> impl Responder {
    web::Json(GroupIndex::available("teacher"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // "/teacher" and "/teacher/"
    cfg.service(
        web::resource(["", "/"])
            .route(web::get().to(index))
            .default_service(web::route().to(method_not_allowed)),
    );
}
