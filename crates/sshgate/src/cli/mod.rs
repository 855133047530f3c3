//! command-line interface for sshgate.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use sshgate_types::Config;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use crate::loader;

pub mod check;
pub mod identities;
pub mod routes;

/// authorization and routing policy for an ssh gateway
#[derive(Parser, Debug)]
#[command(name = "sshgate", version)]
pub struct Cli {
    /// log level
    #[arg(long, env = "SSHGATE_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// initialize the global tracing subscriber.
    pub fn init_logging(&self) -> Result<()> {
        let log_level_str = self.log_level.clone().unwrap_or_else(|| "info".to_string());
        let log_level = match log_level_str.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }
}

/// available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// validate configuration, host key, and authorized identities
    Check(check::CheckCommand),

    /// list the authorized identities
    Identities(identities::IdentitiesCommand),

    /// show the destinations an identity may reach
    Routes(routes::RoutesCommand),
}

/// common configuration arguments for all subcommands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// path to config file (toml format)
    #[arg(short, long, env = "SSHGATE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// resolve the configuration: explicit path, search paths, or defaults.
    pub async fn load(&self) -> Result<Config> {
        match loader::load_config_file(self.config.as_deref()).await? {
            Some(config) => Ok(config),
            None => {
                debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }
}
