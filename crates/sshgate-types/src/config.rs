//! configuration types for sshgate.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::host::HostRule;

/// main configuration for sshgate.
///
/// the host list is ordered; the destination router walks it top to bottom
/// and the resulting permitted-remotes sequence preserves that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// address the gateway listens on (consumed by the broker).
    pub listen_addr: String,

    /// path to the gateway's ssh host private key (openssh format).
    pub host_key_path: PathBuf,

    /// path to the authorized-identities file (authorized_keys format).
    pub authorized_keys_path: PathBuf,

    /// backend destinations, in routing order.
    #[serde(default)]
    pub hosts: Vec<HostRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:2222".to_string(),
            host_key_path: PathBuf::from("/etc/sshgate/ssh_host_ed25519_key"),
            authorized_keys_path: PathBuf::from("/etc/sshgate/authorized_keys"),
            hosts: Vec::new(),
        }
    }
}

impl Config {
    /// whether any host rule grants unconditional access.
    ///
    /// connections whose key matches no identity are still admitted when
    /// this is true.
    pub fn has_default_access(&self) -> bool {
        self.hosts.iter().any(|h| h.no_auth)
    }
}
