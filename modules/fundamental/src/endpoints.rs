use actix_web::{error::InternalError, web, HttpResponse};
use superheroes_common::{db::Database, error::ErrorInformation};
use utoipa_actix_web::service_config::ServiceConfig;

/// Register all endpoints, backed by the provided database.
pub fn configure(svc: &mut ServiceConfig, db: Database) {
    svc.app_data(web::Data::new(db)).app_data(path_config());
    routes(svc);
}

/// Register the endpoints, without any of the state they require.
pub(crate) fn routes(svc: &mut ServiceConfig) {
    crate::hero::endpoints::configure(svc);
    crate::power::endpoints::configure(svc);
    crate::hero_power::endpoints::configure(svc);
}

/// Ids which don't parse never match a route.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            HttpResponse::NotFound().json(ErrorInformation::new("Not found")),
        )
        .into()
    })
}

