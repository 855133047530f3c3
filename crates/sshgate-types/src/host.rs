//! backend host rules.
//!
//! each rule names one backend destination and the access policy for it:
//! a per-user allow list, or unconditional access via `no_auth`.

use serde::{Deserialize, Serialize};

/// one backend destination plus its access policy.
///
/// # Example
///
/// ```toml
/// [[hosts]]
/// address = "10.0.0.5:22"
/// users = ["alice", "bob"]
///
/// [[hosts]]
/// address = "bastion.internal:22"
/// no_auth = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRule {
    /// destination address (host:port) the broker forwards to.
    pub address: String,

    /// identity names allowed to reach this destination.
    #[serde(default)]
    pub users: Vec<String>,

    /// when true, every admitted connection may reach this destination,
    /// identity match or not.
    #[serde(default)]
    pub no_auth: bool,
}

impl HostRule {
    /// whether the named identity is on this rule's allow list.
    ///
    /// exact string match; `no_auth` is not consulted here.
    pub fn allows_user(&self, name: &str) -> bool {
        self.users.iter().any(|u| u == name)
    }
}
