//! the `routes` subcommand - dry-run the destination router.
//!
//! evaluates the same policy the broker would apply, without emitting audit
//! entries: identities are resolved through the registry directly rather
//! than through the authentication callback.

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Context, Result, bail};
use sshgate_policy::GateEngine;
use sshgate_types::{Identity, PublicKey};

use crate::loader;

/// show the destinations an identity may reach
#[derive(Args, Debug)]
pub struct RoutesCommand {
    #[command(flatten)]
    config: super::ConfigArgs,

    /// evaluate for the named identity
    #[arg(long, conflicts_with = "key")]
    user: Option<String>,

    /// evaluate for the public key in this file
    #[arg(long)]
    key: Option<PathBuf>,

    /// output format (text or json)
    #[arg(short, long, default_value = "text")]
    output: String,
}

/// what the router decided for the requested subject.
enum Evaluation {
    Admitted {
        identity: Option<Identity>,
        remotes: Vec<String>,
    },
    Denied,
}

impl RoutesCommand {
    /// run the routes command
    pub async fn run(self) -> Result<()> {
        let config = self.config.load().await?;
        let engine = loader::build_engine(&config).await?;

        let evaluation = if let Some(path) = &self.key {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read public key file: {:?}", path))?;
            let key = content
                .trim()
                .parse::<ssh_key::PublicKey>()
                .with_context(|| format!("failed to parse public key file: {:?}", path))?;
            let blob = key
                .to_bytes()
                .with_context(|| format!("failed to encode public key: {:?}", path))?;
            let presented = PublicKey::new(key.algorithm().as_str(), blob);

            evaluate(&engine, engine.identities().matching(&presented).cloned())
        } else if let Some(name) = &self.user {
            let identity = engine
                .identities()
                .all()
                .iter()
                .find(|identity| identity.name() == name)
                .cloned();
            match identity {
                Some(identity) => Evaluation::Admitted {
                    remotes: engine.permitted_remotes(Some(&identity)),
                    identity: Some(identity),
                },
                None => bail!("no identity named {:?}", name),
            }
        } else {
            // no subject given: evaluate the unauthenticated path
            evaluate(&engine, None)
        };

        self.print(evaluation)
    }

    fn print(&self, evaluation: Evaluation) -> Result<()> {
        if self.output == "json" {
            let value = match &evaluation {
                Evaluation::Admitted { identity, remotes } => serde_json::json!({
                    "outcome": if identity.is_some() { "matched" } else { "default-access" },
                    "user": identity.as_ref().map(|i| i.name()),
                    "remotes": remotes,
                }),
                Evaluation::Denied => serde_json::json!({
                    "outcome": "denied",
                    "remotes": [],
                }),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        match evaluation {
            Evaluation::Admitted { remotes, .. } => {
                if remotes.is_empty() {
                    println!("(no permitted destinations)");
                }
                for remote in remotes {
                    println!("{}", remote);
                }
            }
            Evaluation::Denied => println!("denied"),
        }
        Ok(())
    }
}

/// apply the admission rules for a resolved identity (or none).
fn evaluate(engine: &GateEngine, identity: Option<Identity>) -> Evaluation {
    match identity {
        Some(identity) => Evaluation::Admitted {
            remotes: engine.permitted_remotes(Some(&identity)),
            identity: Some(identity),
        },
        None if engine.has_default_access() => Evaluation::Admitted {
            remotes: engine.permitted_remotes(None),
            identity: None,
        },
        None => Evaluation::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sshgate_policy::IdentityRegistry;
    use sshgate_types::HostRule;

    fn host(address: &str, users: &[&str], no_auth: bool) -> HostRule {
        HostRule {
            address: address.to_string(),
            users: users.iter().map(|u| u.to_string()).collect(),
            no_auth,
        }
    }

    fn engine(hosts: Vec<HostRule>) -> GateEngine {
        let registry = IdentityRegistry::from_identities(vec![Identity::new(
            PublicKey::new("ssh-ed25519", vec![1; 32]),
            "alice",
        )]);
        GateEngine::new(registry, hosts)
    }

    #[test]
    fn test_evaluate_matched_identity() {
        let engine = engine(vec![host("h1", &["alice"], false), host("h2", &[], true)]);
        let alice = engine.identities().all()[0].clone();

        match evaluate(&engine, Some(alice)) {
            Evaluation::Admitted { identity, remotes } => {
                assert_eq!(identity.unwrap().name(), "alice");
                assert_eq!(remotes, vec!["h1", "h2"]);
            }
            Evaluation::Denied => panic!("expected admission"),
        }
    }

    #[test]
    fn test_evaluate_default_access() {
        let engine = engine(vec![host("h2", &[], true)]);

        match evaluate(&engine, None) {
            Evaluation::Admitted { identity, remotes } => {
                assert!(identity.is_none());
                assert_eq!(remotes, vec!["h2"]);
            }
            Evaluation::Denied => panic!("expected admission"),
        }
    }

    #[test]
    fn test_evaluate_denied_without_default_access() {
        let engine = engine(vec![host("h1", &["alice"], false)]);
        assert!(matches!(evaluate(&engine, None), Evaluation::Denied));
    }
}
