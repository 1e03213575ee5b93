pub mod endpoints;
pub mod openapi;
pub mod sample_data;

pub use sample_data::sample_data;

use std::process::ExitCode;
use superheroes_common::{
    config::Database,
    db::{self, CreationMode},
};
use superheroes_infrastructure::app::http::{HttpServerBuilder, HttpServerConfig};

/// Run the API server
#[derive(clap::Args, Debug)]
pub struct Run {
    /// The database creation mode
    #[arg(long, env, value_enum, default_value_t = CreationMode::Default)]
    pub creation: CreationMode,

    // flattened commands must go last
    //
    /// Database configuration
    #[command(flatten)]
    pub database: Database,

    #[command(flatten)]
    pub http: HttpServerConfig,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let db = db::Database::with_external_config(&self.database, self.creation).await?;

        HttpServerBuilder::try_from(self.http)?
            .openapi_info(openapi::info())
            .configure(move |svc| endpoints::configure(svc, db.clone()))
            .run()
            .await?;

        Ok(ExitCode::SUCCESS)
    }
}
