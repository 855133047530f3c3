//! authorized identities.

use serde::{Deserialize, Serialize};

use crate::keys::PublicKey;

/// an authorized public key bound to a display name.
///
/// immutable once loaded. The name comes from the authorized-keys comment
/// field and may be empty; host allow lists match it by exact string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    public_key: PublicKey,
    name: String,
}

impl Identity {
    /// create an identity from a public key and display name.
    pub fn new(public_key: PublicKey, name: impl Into<String>) -> Self {
        Self {
            public_key,
            name: name.into(),
        }
    }

    /// the identity's public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// the identity's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
