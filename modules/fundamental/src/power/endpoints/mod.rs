
use crate::{
    power::{
        model::{PowerHead, PowerUpdate},
        service::PowerService,
    },
    Error,
};
use actix_web::{get, patch, web, HttpResponse, Responder};
use sea_orm::TransactionTrait;
use superheroes_common::{db::Database, error::ErrorInformation};

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig) {
    let service = PowerService::new();
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(get)
        .service(update);
}

#[utoipa::path(
    tag = "power",
    operation_id = "listPowers",
    responses(
        (status = 200, description = "All powers", body = Vec<PowerHead>),
    ),
)]
#[get("/powers")]
/// List powers
pub async fn all(
    service: web::Data<PowerService>,
    db: web::Data<Database>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(service.fetch_powers(db.get_ref()).await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "getPower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "The power", body = PowerHead),
        (status = 404, description = "The power could not be found", body = ErrorInformation),
    ),
)]
#[get("/powers/{id}")]
/// Retrieve a power
pub async fn get(
    service: web::Data<PowerService>,
    db: web::Data<Database>,
    id: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let fetched = match i32::try_from(id.into_inner()) {
        Ok(id) => service.fetch_power(id, db.get_ref()).await?,
        Err(_) => None,
    };

    match fetched {
        Some(fetched) => Ok(HttpResponse::Ok().json(fetched)),
        None => Err(Error::NotFound("Power not found".into()).into()),
    }
}

#[utoipa::path(
    tag = "power",
    operation_id = "updatePower",
    request_body = PowerUpdate,
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "The updated power", body = PowerHead),
        (status = 400, description = "The description is missing or was rejected", body = ErrorInformation),
        (status = 404, description = "The power could not be found", body = ErrorInformation),
    ),
)]
#[patch("/powers/{id}")]
/// Update the description of a power
pub async fn update(
    service: web::Data<PowerService>,
    db: web::Data<Database>,
    id: web::Path<i64>,
    body: web::Bytes,
) -> actix_web::Result<impl Responder> {
    // ids which don't fit the id column can't exist
    let Ok(id) = i32::try_from(id.into_inner()) else {
        return Err(Error::NotFound("Power not found".into()).into());
    };

    let updated = async {
        let tx = db.begin().await?;

        if service.fetch_power(id, &tx).await?.is_none() {
            return Err(Error::NotFound("Power not found".into()));
        }

        let update = PowerUpdate::from_body(&body)?;
        let updated = service
            .update_description(id, &update.description, &tx)
            .await?
            .ok_or_else(|| Error::NotFound("Power not found".into()))?;

        tx.commit().await?;

        Ok::<_, Error>(updated)
    }
    .await
    .map_err(Error::into_write)?;

    Ok(HttpResponse::Ok().json(updated))
}
