//! error types for sshgate-policy.

use thiserror::Error;

/// errors that can occur while loading policy inputs.
///
/// all variants are fatal at startup; nothing here is produced per
/// connection.
#[derive(Debug, Error)]
pub enum Error {
    /// an authorized-keys record failed to parse.
    #[error("invalid identity record at line {line}: {cause}")]
    ParseIdentity {
        /// the one-based line number of the malformed record.
        line: usize,
        /// the underlying key parse error.
        cause: ssh_key::Error,
    },

    /// a parsed key could not be re-encoded into wire form.
    #[error("failed to encode public key at line {line}: {cause}")]
    EncodeKey {
        /// the one-based line number of the record.
        line: usize,
        /// the underlying encode error.
        cause: ssh_key::Error,
    },
}

/// result type for sshgate-policy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// authentication failed and the connection must be closed.
///
/// terminal for the connection, never for the process. The broker receives
/// this through the `Err` arm of [`crate::SessionPolicy::authenticate`];
/// there are no retries at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("access denied")]
pub struct AccessDenied;
