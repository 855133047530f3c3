//! authorization and routing policy for sshgate.
//!
//! this crate is the decision layer of the gateway: it matches a
//! connection's presented public key against the authorized identities,
//! admits or denies the connection, and computes the ordered list of backend
//! destinations the session may reach. The ssh transport itself lives in an
//! external broker that drives this policy through [`broker::SessionPolicy`].
//!
//! admission is deny-by-default: a connection whose key matches no identity
//! is only admitted when at least one host rule carries `no_auth`.

#![warn(missing_docs)]

pub mod audit;
pub mod broker;
pub mod engine;
pub mod error;
pub mod registry;
pub mod session;
pub mod test_utils;

pub use audit::{AuditSink, TracingSink};
pub use broker::{CallbackError, ConnMeta, SessionPolicy};
pub use engine::{AuthOutcome, GateEngine};
pub use error::{AccessDenied, Error, Result};
pub use registry::IdentityRegistry;
pub use session::Session;
