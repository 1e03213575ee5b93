use clap::Parser;
use std::process::{ExitCode, Termination};
use superheroes_infrastructure::tracing::init_tracing;

mod openapi;
mod seed;

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Replace the content of the database with sample data
    Seed(seed::Run),
    /// Work with the OpenAPI document of the server
    Openapi(openapi::Run),
}

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "superheroesd",
    long_about = None
)]
pub struct Superheroesd {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// Run the API server, the default when no command is given
    #[command(flatten)]
    pub api: superheroes_server::Run,
}

impl Superheroesd {
    async fn run(self) -> ExitCode {
        match self.run_command().await {
            Ok(code) => code,
            Err(err) => {
                log::error!("Error: {err}");
                for (n, err) in err.chain().skip(1).enumerate() {
                    if n == 0 {
                        log::error!("Caused by:");
                    }
                    log::error!("\t{err}");
                }

                ExitCode::FAILURE
            }
        }
    }

    async fn run_command(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Seed(seed)) => seed.run().await,
            Some(Command::Openapi(openapi)) => openapi.run().await,
            None => self.api.run().await,
        }
    }
}

#[actix_web::main]
async fn main() -> impl Termination {
    init_tracing();
    Superheroesd::parse().run().await
}
