//! per-connection session state.

use std::net::SocketAddr;

use sshgate_types::Identity;

/// display name used when a session was admitted without an identity match.
pub const UNKNOWN_USER: &str = "unknown user";

/// per-connection, ephemeral session state.
///
/// created the moment a connection is admitted, populated once during
/// setup, consulted at destination selection, then discarded. A session is
/// exclusively owned by its connection's handling path and never shared
/// across connections.
#[derive(Debug, Clone)]
pub struct Session {
    remote_addr: SocketAddr,
    username: String,
    identity: Option<Identity>,
    permitted_remotes: Vec<String>,
}

impl Session {
    /// create a session for an admitted connection.
    ///
    /// `identity` is `None` for connections admitted via default access.
    /// Permitted remotes start empty and are filled in by session setup.
    pub fn new(
        remote_addr: SocketAddr,
        username: impl Into<String>,
        identity: Option<Identity>,
    ) -> Self {
        Self {
            remote_addr,
            username: username.into(),
            identity,
            permitted_remotes: Vec::new(),
        }
    }

    /// the remote network address of the inbound connection.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    /// the username the connection presented during the ssh handshake.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// the matched identity, if authentication matched one.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// the identity's display name, or [`UNKNOWN_USER`] for default access.
    pub fn display_name(&self) -> &str {
        match &self.identity {
            Some(identity) => identity.name(),
            None => UNKNOWN_USER,
        }
    }

    /// the ordered destinations this session may reach.
    pub fn permitted_remotes(&self) -> &[String] {
        &self.permitted_remotes
    }

    pub(crate) fn set_permitted_remotes(&mut self, remotes: Vec<String>) {
        self.permitted_remotes = remotes;
    }
}
