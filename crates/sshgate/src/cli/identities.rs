//! the `identities` subcommand - list the authorized identities.

use clap::Args;
use color_eyre::eyre::Result;

use crate::loader;

/// list the authorized identities
#[derive(Args, Debug)]
pub struct IdentitiesCommand {
    #[command(flatten)]
    config: super::ConfigArgs,

    /// output format (text or json)
    #[arg(short, long, default_value = "text")]
    output: String,
}

impl IdentitiesCommand {
    /// run the identities command
    pub async fn run(self) -> Result<()> {
        let config = self.config.load().await?;
        let registry = loader::load_registry(&config).await?;

        if self.output == "json" {
            let entries: Vec<serde_json::Value> = registry
                .all()
                .iter()
                .map(|identity| {
                    serde_json::json!({
                        "name": identity.name(),
                        "algorithm": identity.public_key().algorithm(),
                        "key": identity.public_key().short_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for identity in registry.all() {
                println!(
                    "{}\t{}",
                    identity.name(),
                    identity.public_key().short_string()
                );
            }
        }

        Ok(())
    }
}
