pub mod http;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Compress, Condition, Logger},
    web::{self, JsonConfig},
    App, Error,
};

#[derive(Clone, Debug)]
pub struct AppOptions {
    /// Log every request
    pub logger: bool,
    /// Limit for request payloads, in bytes
    pub payload_limit: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            logger: true,
            payload_limit: http::default::JSON_LIMIT,
        }
    }
}

/// Build a new HTTP app in a consistent way.
///
/// The order of adding middleware matters, this function captures it, allowing some choices in
/// the process.
pub fn new_app(
    options: AppOptions,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    // The order of execution is last added becomes first to be executed. So if you read the
    // following lines, read them from end to start!
    App::new()
        .app_data(JsonConfig::default().limit(options.payload_limit))
        .app_data(web::PayloadConfig::new(options.payload_limit))
        // Compress everything
        .wrap(Compress::default())
        // First log the request, so that we know what happens (can't fail)
        .wrap(Condition::new(options.logger, Logger::default()))
}
