//! audit sink for authorization outcomes and destination selection.

use std::net::SocketAddr;

use tracing::{info, warn};

use crate::session::Session;

/// receives authorization outcomes and the final destination selection.
///
/// every method is notification-only and infallible by signature: an
/// implementation writing to a fallible backend must swallow the failure
/// and report it out of band. Each event fires at most once per connection,
/// and callers must not hold cross-connection locks while invoking a sink.
pub trait AuditSink: Send + Sync {
    /// a connection was denied: no identity matched and no host rule grants
    /// default access.
    fn access_denied(&self, remote_addr: SocketAddr, username: &str);

    /// a connection was admitted and its permitted remotes are computed.
    fn authorized(&self, session: &Session);

    /// the remote party selected a destination.
    fn destination_selected(&self, session: &Session, remote: &str);
}

/// the default sink: structured log events via `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AuditSink for TracingSink {
    fn access_denied(&self, remote_addr: SocketAddr, username: &str) {
        warn!(remote = %remote_addr, username, "access denied");
    }

    fn authorized(&self, session: &Session) {
        info!(
            remote = %session.remote_addr(),
            user = session.display_name(),
            username = session.username(),
            remotes = session.permitted_remotes().len(),
            "authorized"
        );
    }

    fn destination_selected(&self, session: &Session, remote: &str) {
        info!(
            remote = %session.remote_addr(),
            user = session.display_name(),
            destination = remote,
            "connecting"
        );
    }
}
