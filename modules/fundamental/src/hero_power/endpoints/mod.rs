
use crate::{
    hero_power::{
        model::{HeroPowerDetails, NewHeroPower},
        service::HeroPowerService,
    },
    Error,
};
use actix_web::{post, web, HttpResponse, Responder};
use sea_orm::TransactionTrait;
use superheroes_common::{db::Database, error::ErrorInformation};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig) {
    let service = HeroPowerService::new();
    config.app_data(web::Data::new(service)).service(create);
}

#[utoipa::path(
    tag = "hero_power",
    operation_id = "createHeroPower",
    request_body = NewHeroPower,
    responses(
        (status = 201, description = "The created hero power", body = HeroPowerDetails),
        (status = 400, description = "Fields are missing or were rejected", body = ErrorInformation),
        (status = 404, description = "The hero or the power could not be found", body = ErrorInformation),
    ),
)]
#[post("/hero_powers")]
/// Give a hero a power
pub async fn create(
    service: web::Data<HeroPowerService>,
    db: web::Data<Database>,
    body: web::Bytes,
) -> actix_web::Result<impl Responder> {
    let new = NewHeroPower::from_body(&body)?;

    let created = async {
        let tx = db.begin().await?;
        let created = service.create_hero_power(new, &tx).await?;
        tx.commit().await?;
        Ok::<_, Error>(created)
    }
    .await
    .map_err(Error::into_write)?;

    Ok(HttpResponse::Created().json(created))
}
