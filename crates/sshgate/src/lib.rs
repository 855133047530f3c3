//! sshgate library - loaders and operator cli for the gateway policy.
//!
//! the policy evaluation itself lives in [`sshgate_policy`]; this crate
//! wires it to the filesystem (config, authorized identities, host key) and
//! exposes the operator commands. The ssh transport is owned by an external
//! connection broker that consumes the policy through
//! [`sshgate_policy::SessionPolicy`].

#![warn(missing_docs)]

pub mod cli;
pub mod loader;
