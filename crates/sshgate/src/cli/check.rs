//! the `check` subcommand - validate gateway configuration and inputs.

use std::collections::HashSet;

use clap::Args;
use color_eyre::eyre::{Result, bail};
use sshgate_types::Config;

use crate::loader;

/// validate configuration, host key, and authorized identities
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    config: super::ConfigArgs,
}

impl CheckCommand {
    /// run the check command
    pub async fn run(self) -> Result<()> {
        let config = self.config.load().await?;

        validate_hosts(&config)?;

        let host_key = loader::load_host_key(&config).await?;
        println!(
            "host key: {} ({})",
            config.host_key_path.display(),
            host_key.algorithm().as_str()
        );

        let registry = loader::load_registry(&config).await?;
        println!("identities: {} loaded", registry.len());
        println!("hosts: {} configured", config.hosts.len());

        for warning in host_warnings(&config, registry.is_empty()) {
            println!("warning: {}", warning);
        }

        println!("ok");
        Ok(())
    }
}

/// reject host lists a broker could not serve.
fn validate_hosts(config: &Config) -> Result<()> {
    for (i, host) in config.hosts.iter().enumerate() {
        if host.address.is_empty() {
            bail!("host rule {} has an empty address", i);
        }
    }
    Ok(())
}

/// non-fatal findings an operator probably wants to know about.
fn host_warnings(config: &Config, registry_empty: bool) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for host in &config.hosts {
        if !seen.insert(host.address.as_str()) {
            warnings.push(format!("duplicate host address: {}", host.address));
        }
        if !host.no_auth && host.users.is_empty() {
            warnings.push(format!(
                "host {} has no allowed users and no default access; it is unreachable",
                host.address
            ));
        }
    }

    if config.hosts.is_empty() {
        warnings.push("no hosts configured; every session will have an empty route".to_string());
    }

    if registry_empty && !config.has_default_access() {
        warnings.push(
            "no identities and no default-access host; every connection will be denied"
                .to_string(),
        );
    }

    warnings
}
