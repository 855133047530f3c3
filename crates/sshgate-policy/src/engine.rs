//! the gateway authorization and routing engine.

use std::net::SocketAddr;
use std::sync::Arc;

use sshgate_types::{HostRule, Identity, PublicKey};

use crate::audit::{AuditSink, TracingSink};
use crate::registry::IdentityRegistry;
use crate::session::Session;

/// outcome of authenticating a presented public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// the key matched an authorized identity.
    Matched(Identity),
    /// no identity matched, but at least one host rule grants unconditional
    /// access, so the connection is admitted without an identity.
    DefaultAccess,
    /// no identity matched and nothing grants default access. Terminal for
    /// the connection; the broker must close it.
    Denied,
}

/// thread-safe authorization and routing engine.
///
/// wraps the identity registry and host rules in arc for cheap cloning and
/// concurrent access. All evaluation methods take `&self`, perform no I/O,
/// and never block, making the engine safe to share across any number of
/// connection handlers once construction completes.
pub struct GateEngine {
    inner: Arc<Inner>,
}

struct Inner {
    identities: IdentityRegistry,
    hosts: Vec<HostRule>,
    sink: Arc<dyn AuditSink>,
}

impl GateEngine {
    /// create an engine over the given identities and host rules.
    ///
    /// audit events go to the default [`TracingSink`].
    pub fn new(identities: IdentityRegistry, hosts: Vec<HostRule>) -> Self {
        Self::with_sink(identities, hosts, Arc::new(TracingSink))
    }

    /// create an engine with an explicit audit sink.
    pub fn with_sink(
        identities: IdentityRegistry,
        hosts: Vec<HostRule>,
        sink: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                identities,
                hosts,
                sink,
            }),
        }
    }

    /// the identity registry this engine evaluates against.
    pub fn identities(&self) -> &IdentityRegistry {
        &self.inner.identities
    }

    /// the host rules, in routing order.
    pub fn hosts(&self) -> &[HostRule] {
        &self.inner.hosts
    }

    /// whether any host rule grants unconditional access.
    pub fn has_default_access(&self) -> bool {
        self.inner.hosts.iter().any(|h| h.no_auth)
    }

    /// decide whether a connection presenting `key` is admitted.
    ///
    /// first registry match wins. With no match, the connection is admitted
    /// without an identity when some host rule has `no_auth`; otherwise it
    /// is denied and one audit entry records the remote address and the
    /// presented username. Single-shot per connection; denial is terminal.
    pub fn authenticate(
        &self,
        remote_addr: SocketAddr,
        username: &str,
        key: &PublicKey,
    ) -> AuthOutcome {
        if let Some(identity) = self.inner.identities.matching(key) {
            return AuthOutcome::Matched(identity.clone());
        }

        if self.has_default_access() {
            return AuthOutcome::DefaultAccess;
        }

        self.inner.sink.access_denied(remote_addr, username);
        AuthOutcome::Denied
    }

    /// compute the destinations an identity may reach, in host-rule order.
    ///
    /// a `no_auth` rule always contributes its address; other rules
    /// contribute theirs when the identity's name is on the allow list.
    /// Each rule contributes at most once. An empty result is valid: the
    /// session stands, it just has nowhere to go.
    pub fn permitted_remotes(&self, identity: Option<&Identity>) -> Vec<String> {
        let mut remotes = Vec::new();

        for host in &self.inner.hosts {
            if host.no_auth {
                remotes.push(host.address.clone());
                continue;
            }

            let Some(identity) = identity else {
                continue;
            };

            if host.allows_user(identity.name()) {
                remotes.push(host.address.clone());
            }
        }

        remotes
    }

    /// populate the session's permitted remotes and record the admission.
    ///
    /// invoked exactly once per admitted connection, between authentication
    /// and destination selection. The audit entry fires after routing is
    /// computed.
    pub fn session_setup(&self, session: &mut Session) {
        let remotes = self.permitted_remotes(session.identity());
        session.set_permitted_remotes(remotes);
        self.inner.sink.authorized(session);
    }

    /// record the destination the remote party selected.
    pub fn destination_selected(&self, session: &Session, remote: &str) {
        self.inner.sink.destination_selected(session, remote);
    }
}

impl Clone for GateEngine {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
