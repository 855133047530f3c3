//! public key material presented by connections and bound to identities.
//!
//! the key is carried as its ssh algorithm name plus the marshaled wire
//! blob. Key equality is equal algorithm name and byte-equal blob, which is
//! the comparison the authentication matcher relies on.

use serde::{Deserialize, Serialize};

/// an ssh public key: algorithm name plus marshaled wire-format blob.
///
/// two keys are equal when both the algorithm name and every byte of the
/// blob agree. Keys are never compared by fingerprint or comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    algorithm: String,
    blob: Vec<u8>,
}

impl PublicKey {
    /// create a public key from an algorithm name and a wire-format blob.
    pub fn new(algorithm: impl Into<String>, blob: Vec<u8>) -> Self {
        Self {
            algorithm: algorithm.into(),
            blob,
        }
    }

    /// the ssh algorithm name, e.g. `ssh-ed25519`.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// the marshaled wire-format key blob.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// returns a short string representation for logging.
    pub fn short_string(&self) -> String {
        if self.blob.len() >= 4 {
            format!(
                "{}:{:02x}{:02x}{:02x}{:02x}...",
                self.algorithm, self.blob[0], self.blob[1], self.blob[2], self.blob[3]
            )
        } else {
            format!("{}:???", self.algorithm)
        }
    }
}
