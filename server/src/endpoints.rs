use actix_web::{get, http::header::ContentType, HttpResponse, Responder};
use superheroes_common::db::Database;
use utoipa_actix_web::service_config::ServiceConfig;

pub fn configure(svc: &mut ServiceConfig, db: Database) {
    svc.service(index);
    superheroes_module_fundamental::configure(svc, db);
}

#[utoipa::path(
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/html"),
    ),
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body("<h1>Superheroes API</h1>")
}
