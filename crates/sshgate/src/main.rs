//! sshgate - authorization and routing policy for an ssh gateway

use clap::Parser;
use color_eyre::eyre::Result;
use sshgate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    cli.init_logging()?;

    match cli.command {
        Command::Check(cmd) => cmd.run().await,
        Command::Identities(cmd) => cmd.run().await,
        Command::Routes(cmd) => cmd.run().await,
    }
}
