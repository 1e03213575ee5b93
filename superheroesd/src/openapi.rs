use anyhow::{anyhow, Error, Result};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use superheroes_server::openapi::openapi;

#[derive(clap::Args, Debug)]
pub struct Run {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Write the document to a file, as YAML or JSON depending on the file extension
    Export(Export),
    /// Print the document as JSON
    Print,
}

impl Run {
    pub async fn run(self) -> Result<ExitCode> {
        match self.command {
            Command::Export(export) => export.run(),
            Command::Print => {
                println!("{}", openapi().to_pretty_json()?);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct Export {
    /// The file the document should be exported to
    #[arg(long, env)]
    pub file: PathBuf,
}

impl Export {
    pub fn run(self) -> Result<ExitCode> {
        let doc = render(&self.file)?;
        fs::write(&self.file, doc)?;
        Ok(ExitCode::SUCCESS)
    }
}

fn render(file: &std::path::Path) -> Result<String> {
    let name = file
        .file_name()
        .map(|name| name.to_string_lossy())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| anyhow!("Invalid file name"))?;

    let api = openapi();
    if name.ends_with(".yml") || name.ends_with(".yaml") {
        api.to_yaml().map_err(Error::new)
    } else {
        api.to_pretty_json().map_err(Error::new)
    }
}
