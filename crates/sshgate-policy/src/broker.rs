//! the callback contract between the policy and the external connection
//! broker.
//!
//! the broker owns the ssh transport, channel handling, and the destination
//! picker; it drives the policy at three points in a connection's lifetime:
//! authentication, post-authentication setup, and destination selection.
//! One policy object implements all three, which keeps the policy testable
//! without a live broker.

use std::net::SocketAddr;

use sshgate_types::{Identity, PublicKey};

use crate::engine::{AuthOutcome, GateEngine};
use crate::error::AccessDenied;
use crate::session::Session;

/// error type carried across the broker boundary.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// connection metadata the broker presents during authentication.
#[derive(Debug, Clone)]
pub struct ConnMeta {
    /// remote network address of the inbound connection.
    pub remote_addr: SocketAddr,
    /// username presented during the ssh handshake.
    pub username: String,
}

/// the three callback points a connection broker invokes.
///
/// call order per connection: [`authenticate`](Self::authenticate) once,
/// then on success [`session_setup`](Self::session_setup) once, then
/// [`destination_selected`](Self::destination_selected) at most once.
pub trait SessionPolicy: Send + Sync {
    /// decide admission for a connection presenting `key`.
    ///
    /// `Ok(Some(identity))` on an identity match, `Ok(None)` for default
    /// access, `Err` for denial — the broker must close the connection.
    fn authenticate(
        &self,
        conn: &ConnMeta,
        key: &PublicKey,
    ) -> Result<Option<Identity>, CallbackError>;

    /// populate the session's permitted remotes.
    ///
    /// an `Err` aborts the session before any destination can be chosen.
    fn session_setup(&self, session: &mut Session) -> Result<(), CallbackError>;

    /// notification that a destination was chosen.
    ///
    /// an `Err` is a notification failure only; the broker logs it and the
    /// selection stands.
    fn destination_selected(
        &self,
        session: &Session,
        remote: &str,
    ) -> Result<(), CallbackError>;
}

impl SessionPolicy for GateEngine {
    fn authenticate(
        &self,
        conn: &ConnMeta,
        key: &PublicKey,
    ) -> Result<Option<Identity>, CallbackError> {
        match GateEngine::authenticate(self, conn.remote_addr, &conn.username, key) {
            AuthOutcome::Matched(identity) => Ok(Some(identity)),
            AuthOutcome::DefaultAccess => Ok(None),
            AuthOutcome::Denied => Err(Box::new(AccessDenied)),
        }
    }

    fn session_setup(&self, session: &mut Session) -> Result<(), CallbackError> {
        GateEngine::session_setup(self, session);
        Ok(())
    }

    fn destination_selected(
        &self,
        session: &Session,
        remote: &str,
    ) -> Result<(), CallbackError> {
        GateEngine::destination_selected(self, session, remote);
        Ok(())
    }
}
