use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod seed;

#[derive(Parser)]
#[command(about = "tracks job applications")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// serve the dashboard, detail and add-job pages
    Listen,
    /// print the seed jobs as json
    Seed,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Seed) => {
            seed::print()?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
