use crate::app::{new_app, AppOptions};
use actix_web::{
    dev::{ServiceFactory, ServiceRequest},
    web, App, HttpResponse, HttpServer,
};
use anyhow::Context;
use std::fmt::Debug;
use std::net::{IpAddr, SocketAddr, TcpListener};
use std::str::FromStr;
use std::sync::Arc;
use utoipa::openapi::{Info, OpenApi};
use utoipa_actix_web::{AppExt, UtoipaApp};

#[derive(Clone, Debug, clap::Args)]
#[command(
    rename_all_env = "SCREAMING_SNAKE_CASE",
    next_help_heading = "HTTP endpoint"
)]
#[group(id = "http")]
pub struct HttpServerConfig {
    /// The number of worker threads, defaults to zero, which falls back to the number of cores.
    #[arg(
        id = "http-server-workers",
        long,
        env = "HTTP_SERVER_WORKERS",
        default_value_t = 0
    )]
    pub workers: usize,

    /// The address to listen on
    #[arg(
        id = "http-server-bind-address",
        long,
        env = "HTTP_SERVER_BIND_ADDR",
        default_value_t = default::bind_addr(),
    )]
    pub bind_addr: String,

    /// The port to listen on
    #[arg(
        id = "http-server-bind-port",
        short = 'p',
        long,
        env = "HTTP_SERVER_BIND_PORT",
        default_value_t = default::PORT,
    )]
    pub bind_port: u16,

    /// The JSON request limit, in bytes
    #[arg(
        id = "http-server-json-limit",
        long,
        env = "HTTP_SERVER_JSON_LIMIT",
        default_value_t = default::JSON_LIMIT,
    )]
    pub json_limit: usize,
}

pub mod default {
    pub const PORT: u16 = 5555;
    pub const JSON_LIMIT: usize = 2 * 1024 * 1024;

    pub fn bind_addr() -> String {
        "127.0.0.1".to_string()
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            bind_addr: default::bind_addr(),
            bind_port: default::PORT,
            json_limit: default::JSON_LIMIT,
        }
    }
}

impl TryFrom<HttpServerConfig> for HttpServerBuilder {
    type Error = anyhow::Error;

    fn try_from(value: HttpServerConfig) -> Result<Self, Self::Error> {
        let addr = SocketAddr::new(
            IpAddr::from_str(&value.bind_addr).context("parse bind address")?,
            value.bind_port,
        );

        Ok(HttpServerBuilder::new()
            .workers(value.workers)
            .bind(addr)
            .json_limit(value.json_limit))
    }
}

pub type ConfiguratorFn =
    dyn Fn(&mut utoipa_actix_web::service_config::ServiceConfig) + Send + Sync;

pub type PostConfiguratorFn = dyn Fn(&mut web::ServiceConfig) + Send + Sync;

pub struct HttpServerBuilder {
    configurator: Option<Arc<ConfiguratorFn>>,
    post_configurator: Option<Arc<PostConfiguratorFn>>,

    bind: Bind,
    workers: usize,
    json_limit: usize,

    openapi_info: Option<Info>,
}

pub enum Bind {
    /// Use the provided listener
    Listener(TcpListener),
    /// Bind to the provided address and port
    Address(SocketAddr),
}

impl Default for HttpServerBuilder {
    fn default() -> Self {
        HttpServerBuilder::new()
    }
}

impl HttpServerBuilder {
    pub fn new() -> Self {
        Self {
            configurator: None,
            post_configurator: None,
            bind: Bind::Address(SocketAddr::new(
                IpAddr::from([127, 0, 0, 1]),
                default::PORT,
            )),
            workers: 0,
            json_limit: default::JSON_LIMIT,
            openapi_info: None,
        }
    }

    pub fn openapi_info(mut self, openapi_info: Info) -> Self {
        self.openapi_info = Some(openapi_info);
        self
    }

    pub fn configure<F>(mut self, configurator: F) -> Self
    where
        F: Fn(&mut utoipa_actix_web::service_config::ServiceConfig) + Send + Sync + 'static,
    {
        self.configurator = Some(Arc::new(configurator));
        self
    }

    pub fn post_configure<F>(mut self, post_configurator: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.post_configurator = Some(Arc::new(post_configurator));
        self
    }

    pub fn listen(mut self, listener: TcpListener) -> Self {
        self.bind = Bind::Listener(listener);
        self
    }

    pub fn bind(mut self, addr: impl Into<SocketAddr>) -> Self {
        self.bind = Bind::Address(addr.into());
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn json_limit(mut self, json_limit: usize) -> Self {
        self.json_limit = json_limit;
        self
    }

    pub async fn run(self) -> anyhow::Result<()> {
        log::info!("JSON limit: {} bytes", self.json_limit);

        let configurator = self.configurator;
        let post_configurator = self.post_configurator;
        let openapi_info = self.openapi_info;
        let json_limit = self.json_limit;

        let mut http = HttpServer::new(move || {
            let app = new_app(AppOptions {
                logger: true,
                payload_limit: json_limit,
            })
            .into_utoipa_app();

            // configure application

            let app = app.configure(|svc| {
                if let Some(config) = &configurator {
                    config(svc);
                }
            });

            let app = app.apply_openapi(openapi_info.clone());

            // apply post-configuration, required mostly for "catch all" handlers

            app.configure(|svc| {
                if let Some(post_config) = &post_configurator {
                    post_config(svc);
                }
            })
        });

        if self.workers > 0 {
            log::info!("Using {} worker(s)", self.workers);
            http = http.workers(self.workers);
        }

        match self.bind {
            Bind::Listener(listener) => {
                log::info!("Binding to provided listener: {listener:?}");
                http = http.listen(listener).context("listen")?;
            }
            Bind::Address(addr) => {
                log::info!("Binding to: {addr}");
                http = http.bind(addr).context("bind")?;
            }
        }

        Ok(http.run().await?)
    }
}

pub trait ApplyOpenApi<T> {
    /// Turn a [`UtoipaApp`] into a [`App`], serving the collected API document at `/openapi.json`
    fn apply_openapi(self, openapi_info: Option<Info>) -> App<T>;
}

impl<T> ApplyOpenApi<T> for UtoipaApp<T>
where
    T: ServiceFactory<ServiceRequest, Config = (), Error = actix_web::Error, InitError = ()>,
{
    fn apply_openapi(self, openapi_info: Option<Info>) -> App<T> {
        let (app, mut openapi) = self.split_for_parts();
        if let Some(info) = openapi_info {
            openapi.info = info;
        }

        app.app_data(web::Data::new(openapi))
            .route("/openapi.json", web::get().to(openapi_json))
    }
}

async fn openapi_json(openapi: web::Data<OpenApi>) -> HttpResponse {
    HttpResponse::Ok().json(openapi.get_ref())
}
