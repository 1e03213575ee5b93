use std::process::ExitCode;
use superheroes_common::{
    config::Database,
    db::{self, CreationMode},
};

#[derive(clap::Args, Debug)]
pub struct Run {
    /// The database creation mode
    #[arg(long, env, value_enum, default_value_t = CreationMode::Default)]
    pub creation: CreationMode,

    #[command(flatten)]
    pub database: Database,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let db = db::Database::with_external_config(&self.database, self.creation).await?;

        superheroes_server::sample_data(&db).await?;
        db.close().await?;

        Ok(ExitCode::SUCCESS)
    }
}
