//! integration tests for the full connection lifecycle.
//!
//! drives the policy exactly the way a connection broker would: through a
//! `dyn SessionPolicy` - the authentication callback, then session setup,
//! then destination selection, asserting the audit trail along the way.

use std::net::SocketAddr;
use std::sync::Arc;

use sshgate_policy::test_utils::{AuditEvent, RecordingSink};
use sshgate_policy::{ConnMeta, GateEngine, IdentityRegistry, Session, SessionPolicy};
use sshgate_types::{HostRule, PublicKey};

const ALICE_LINE: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIGVyu2wcEE3Zko46fEDui1T9fSVzdcau0YPbLtGKS9Fk alice";
const BOB_LINE: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAILGyAbOm4bpuIo87qGwbaahUpUyglivEVL/2uHMZ5OL0 bob";
const CAROL_LINE: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIDwzpFvehY5VXgvIcIabcqtJJsQYLUW1cmudwiaT+qgf carol";

fn key_of(line: &str) -> PublicKey {
    let registry = IdentityRegistry::load(line).expect("fixture line should parse");
    registry.all()[0].public_key().clone()
}

fn host(address: &str, users: &[&str], no_auth: bool) -> HostRule {
    HostRule {
        address: address.to_string(),
        users: users.iter().map(|u| u.to_string()).collect(),
        no_auth,
    }
}

fn remote() -> SocketAddr {
    "203.0.113.40:51022".parse().unwrap()
}

fn conn(username: &str) -> ConnMeta {
    ConnMeta {
        remote_addr: remote(),
        username: username.to_string(),
    }
}

/// alice and bob are registered; carol's key is not.
fn gateway(hosts: Vec<HostRule>) -> (GateEngine, Arc<RecordingSink>) {
    let registry = IdentityRegistry::load(&format!("{}\n{}\n", ALICE_LINE, BOB_LINE))
        .expect("fixture registry should parse");
    let sink = Arc::new(RecordingSink::new());
    let engine = GateEngine::with_sink(registry, hosts, sink.clone());
    (engine, sink)
}

#[test]
fn matched_connection_full_lifecycle() {
    let (engine, sink) = gateway(vec![host("h1", &["alice"], false), host("h2", &[], true)]);
    let policy: &dyn SessionPolicy = &engine;

    // authentication
    let meta = conn("git");
    let identity = policy
        .authenticate(&meta, &key_of(ALICE_LINE))
        .expect("alice should be admitted")
        .expect("alice should match an identity");
    assert_eq!(identity.name(), "alice");

    // setup
    let mut session = Session::new(meta.remote_addr, meta.username, Some(identity));
    policy.session_setup(&mut session).unwrap();
    assert_eq!(session.permitted_remotes(), vec!["h1", "h2"]);

    // selection
    policy.destination_selected(&session, "h1").unwrap();

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        AuditEvent::Authorized {
            remote_addr: remote(),
            name: "alice".to_string(),
            username: "git".to_string(),
            remotes: vec!["h1".to_string(), "h2".to_string()],
        }
    );
    assert_eq!(
        events[1],
        AuditEvent::Selected {
            remote_addr: remote(),
            name: "alice".to_string(),
            destination: "h1".to_string(),
        }
    );
}

#[test]
fn registered_but_unlisted_identity_gets_open_hosts_only() {
    let (engine, _) = gateway(vec![host("h1", &["alice"], false), host("h2", &[], true)]);
    let policy: &dyn SessionPolicy = &engine;

    let meta = conn("git");
    let identity = policy
        .authenticate(&meta, &key_of(BOB_LINE))
        .unwrap()
        .unwrap();

    let mut session = Session::new(meta.remote_addr, meta.username, Some(identity));
    policy.session_setup(&mut session).unwrap();
    assert_eq!(session.permitted_remotes(), vec!["h2"]);
}

#[test]
fn unregistered_key_with_open_host_gets_default_access() {
    let (engine, sink) = gateway(vec![host("h1", &["alice"], false), host("h2", &[], true)]);
    let policy: &dyn SessionPolicy = &engine;

    let meta = conn("git");
    let identity = policy.authenticate(&meta, &key_of(CAROL_LINE)).unwrap();
    assert!(identity.is_none());

    let mut session = Session::new(meta.remote_addr, meta.username, None);
    policy.session_setup(&mut session).unwrap();
    assert_eq!(session.permitted_remotes(), vec!["h2"]);
    assert_eq!(session.display_name(), "unknown user");

    // default access is not a denial; nothing was logged at auth time
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn unregistered_key_without_open_host_is_denied_once() {
    let (engine, sink) = gateway(vec![host("h1", &["alice"], false)]);
    let policy: &dyn SessionPolicy = &engine;

    let meta = conn("deploy");
    let err = policy
        .authenticate(&meta, &key_of(CAROL_LINE))
        .expect_err("carol should be denied");
    assert_eq!(err.to_string(), "access denied");

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        AuditEvent::Denied {
            remote_addr: remote(),
            username: "deploy".to_string(),
        }
    );
}

#[test]
fn authenticated_session_with_no_destinations_is_valid() {
    let (engine, sink) = gateway(vec![host("h1", &["alice"], false)]);
    let policy: &dyn SessionPolicy = &engine;

    let meta = conn("git");
    let identity = policy
        .authenticate(&meta, &key_of(BOB_LINE))
        .unwrap()
        .unwrap();

    let mut session = Session::new(meta.remote_addr, meta.username, Some(identity));
    policy.session_setup(&mut session).unwrap();

    assert!(session.permitted_remotes().is_empty());
    // the admission is still audited
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn routing_is_deterministic_across_calls() {
    let (engine, _) = gateway(vec![
        host("h3", &[], true),
        host("h1", &["bob", "alice"], false),
        host("h2", &["alice"], false),
    ]);

    let alice = engine
        .identities()
        .matching(&key_of(ALICE_LINE))
        .expect("alice should be registered")
        .clone();

    let first = engine.permitted_remotes(Some(&alice));
    let second = engine.permitted_remotes(Some(&alice));
    assert_eq!(first, vec!["h3", "h1", "h2"]);
    assert_eq!(first, second);
}
