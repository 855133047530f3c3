//! the authorized-identity registry.
//!
//! identities are loaded once at startup from authorized_keys text and are
//! read-only afterwards. Load order is preserved and is the precedence order
//! for duplicate keys.

use ssh_key::authorized_keys::Entry;
use sshgate_types::{Identity, PublicKey};

use crate::error::{Error, Result};

/// an immutable, ordered set of authorized identities.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    identities: Vec<Identity>,
}

impl IdentityRegistry {
    /// create a registry with no identities.
    pub fn empty() -> Self {
        Self::default()
    }

    /// create a registry from already-constructed identities, in order.
    pub fn from_identities(identities: Vec<Identity>) -> Self {
        Self { identities }
    }

    /// parse a registry from authorized_keys text.
    ///
    /// blank lines and `#` comment lines are skipped; entries may carry
    /// option prefixes. The key comment becomes the identity's display
    /// name. Any malformed record fails the whole load.
    pub fn load(input: &str) -> Result<Self> {
        let mut identities = Vec::new();

        for (idx, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let entry: Entry = line
                .parse()
                .map_err(|cause| Error::ParseIdentity {
                    line: idx + 1,
                    cause,
                })?;

            let key = entry.public_key();
            let blob = key.to_bytes().map_err(|cause| Error::EncodeKey {
                line: idx + 1,
                cause,
            })?;

            let public_key = PublicKey::new(key.algorithm().as_str(), blob);
            identities.push(Identity::new(public_key, key.comment()));
        }

        Ok(Self { identities })
    }

    /// all identities in load order.
    pub fn all(&self) -> &[Identity] {
        &self.identities
    }

    /// number of identities.
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// whether the registry holds no identities.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// find the identity whose key equals the presented key.
    ///
    /// linear scan in load order; when duplicate keys exist, the
    /// earliest-loaded entry wins.
    pub fn matching(&self, presented: &PublicKey) -> Option<&Identity> {
        self.identities
            .iter()
            .find(|identity| identity.public_key() == presented)
    }
}
