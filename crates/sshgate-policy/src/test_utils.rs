//! test support: an audit sink that records events for assertions.

use std::net::SocketAddr;
use std::sync::Mutex;

use crate::audit::AuditSink;
use crate::session::Session;

/// one recorded audit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    /// a connection was denied.
    Denied {
        /// remote address of the denied connection.
        remote_addr: SocketAddr,
        /// username the connection presented.
        username: String,
    },
    /// a connection was admitted.
    Authorized {
        /// remote address of the admitted connection.
        remote_addr: SocketAddr,
        /// resolved display name.
        name: String,
        /// username the connection presented.
        username: String,
        /// permitted remotes computed for the session.
        remotes: Vec<String>,
    },
    /// a destination was selected.
    Selected {
        /// remote address of the connection.
        remote_addr: SocketAddr,
        /// resolved display name.
        name: String,
        /// the chosen destination address.
        destination: String,
    },
}

/// an [`AuditSink`] that records every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingSink {
    /// create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// a snapshot of all recorded events, in order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit event lock poisoned").clone()
    }

    fn push(&self, event: AuditEvent) {
        self.events.lock().expect("audit event lock poisoned").push(event);
    }
}

impl AuditSink for RecordingSink {
    fn access_denied(&self, remote_addr: SocketAddr, username: &str) {
        self.push(AuditEvent::Denied {
            remote_addr,
            username: username.to_string(),
        });
    }

    fn authorized(&self, session: &Session) {
        self.push(AuditEvent::Authorized {
            remote_addr: session.remote_addr(),
            name: session.display_name().to_string(),
            username: session.username().to_string(),
            remotes: session.permitted_remotes().to_vec(),
        });
    }

    fn destination_selected(&self, session: &Session, remote: &str) {
        self.push(AuditEvent::Selected {
            remote_addr: session.remote_addr(),
            name: session.display_name().to_string(),
            destination: remote.to_string(),
        });
    }
}
