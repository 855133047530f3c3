//! startup loading: configuration, authorized identities, host key.
//!
//! everything here is fatal on failure - the policy layer only ever sees
//! validated, in-memory data. Per-connection decisions never touch the
//! filesystem.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};
use sshgate_policy::{GateEngine, IdentityRegistry};
use sshgate_types::Config;
use tracing::debug;

/// default config file search paths (in order of priority).
pub const CONFIG_SEARCH_PATHS: &[&str] = &["/etc/sshgate/config.toml", "./config.toml"];

/// find and load the config file, returning none if no config file is found.
///
/// an explicit path must exist; otherwise the default search paths are
/// probed in order.
pub async fn load_config_file(config_path: Option<&Path>) -> Result<Option<Config>> {
    if let Some(path) = config_path {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {:?}", path))?;
        return Ok(Some(config));
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            debug!("Found config file at {:?}", path);
            let content = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read config file: {:?}", path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("failed to parse config file: {:?}", path))?;
            return Ok(Some(config));
        }
    }

    Ok(None)
}

/// load the authorized-identities file named by the config.
pub async fn load_registry(config: &Config) -> Result<IdentityRegistry> {
    let content = tokio::fs::read_to_string(&config.authorized_keys_path)
        .await
        .with_context(|| {
            format!(
                "failed to read authorized keys file: {:?}",
                config.authorized_keys_path
            )
        })?;

    IdentityRegistry::load(&content).with_context(|| {
        format!(
            "failed to parse authorized keys file: {:?}",
            config.authorized_keys_path
        )
    })
}

/// load and parse the gateway's ssh host private key.
///
/// the broker needs this to present the gateway's host identity; loading it
/// here catches broken deployments before any connection is accepted.
pub async fn load_host_key(config: &Config) -> Result<ssh_key::PrivateKey> {
    let content = tokio::fs::read_to_string(&config.host_key_path)
        .await
        .with_context(|| format!("failed to read host key file: {:?}", config.host_key_path))?;

    ssh_key::PrivateKey::from_openssh(&content)
        .with_context(|| format!("failed to parse host key file: {:?}", config.host_key_path))
}

/// build the policy engine from a loaded config.
pub async fn build_engine(config: &Config) -> Result<GateEngine> {
    let registry = load_registry(config).await?;
    Ok(GateEngine::new(registry, config.hosts.clone()))
}
