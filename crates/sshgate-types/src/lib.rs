//! shared types for sshgate.
//!
//! this crate holds the configuration surface and the raw policy records
//! (public keys, identities, host rules). It performs no I/O and no policy
//! evaluation; the evaluation lives in sshgate-policy.

#![warn(missing_docs)]

pub mod config;
pub mod host;
pub mod identity;
pub mod keys;

pub use config::Config;
pub use host::HostRule;
pub use identity::Identity;
pub use keys::PublicKey;
