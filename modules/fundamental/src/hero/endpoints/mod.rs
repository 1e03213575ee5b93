
use crate::{
    hero::{
        model::{HeroDetails, HeroHead},
        service::HeroService,
    },
    Error,
};
use actix_web::{get, web, HttpResponse, Responder};
use superheroes_common::{db::Database, error::ErrorInformation};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig) {
    let service = HeroService::new();
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(get);
}

#[utoipa::path(
    tag = "hero",
    operation_id = "listHeroes",
    responses(
        (status = 200, description = "All heroes", body = Vec<HeroHead>),
    ),
)]
#[get("/heroes")]
/// List heroes
pub async fn all(
    service: web::Data<HeroService>,
    db: web::Data<Database>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.fetch_heroes(db.get_ref()).await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "getHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 200, description = "The hero, including their powers", body = HeroDetails),
        (status = 404, description = "The hero could not be found", body = ErrorInformation),
    ),
)]
#[get("/heroes/{id}")]
/// Retrieve hero details
pub async fn get(
    service: web::Data<HeroService>,
    db: web::Data<Database>,
    id: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let fetched = match i32::try_from(id.into_inner()) {
        Ok(id) => service.fetch_hero(id, db.get_ref()).await?,
        Err(_) => None,
    };

    match fetched {
        Some(fetched) => Ok(HttpResponse::Ok().json(fetched)),
        None => Err(Error::NotFound("Hero not found".into()).into()),
    }
}
