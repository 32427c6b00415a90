use super::{method_not_allowed, GroupIndex};
use actix_web::{web, Responder};

#[utoipa::path(
    get,
    path = "/admin",
    tag = "admin",
    operation_id = "admin_index",
    responses((status = 200, body = GroupIndex))
)]
#[tracing::instrument(name = "Admin index.")]
pub async fn index() -> impl Responder {
    web::Json(GroupIndex::available("admin"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // "/admin" and "/admin/"
    cfg.service(
        web::resource(["", "/"])
            .route(web::get().to(index))
            .default_service(web::route().to(method_not_allowed)),
    );
}
