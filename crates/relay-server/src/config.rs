//! Relay configuration.
//!
//! Loaded once at startup from the process environment (the deployment
//! surface) or a TOML file, then passed explicitly to every collaborator.
//! Immutable for the life of the process; there is no reload mechanism.

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Shared webhook secret. `None` (or empty) disables signature
    /// verification entirely — an explicit escape hatch for unsecured
    /// deployments, surfaced loudly at startup.
    #[serde(default)]
    pub webhook_secret: Option<String>,
    #[serde(default)]
    pub gitea: GiteaConfig,
    #[serde(default)]
    pub github: GithubConfig,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GiteaConfig {
    /// Public base URL, for the mirror-sync management API.
    #[serde(default)]
    pub base_url: String,
    /// Address the relay clones from; usually an internal address with
    /// anonymous read access.
    #[serde(default)]
    pub local_url: String,
    /// Admin-scoped token for the mirror-sync endpoint.
    #[serde(default)]
    pub admin_token: String,
    #[serde(default)]
    pub repo_owner: String,
    #[serde(default)]
    pub repo_name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Token embedded in the push URL (token-in-URL auth).
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub repo_owner: String,
    #[serde(default)]
    pub repo_name: String,
}

fn default_bind_addr() -> SocketAddr {
    "127.0.0.1:5000".parse().unwrap()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            webhook_secret: None,
            gitea: GiteaConfig::default(),
            github: GithubConfig::default(),
        }
    }
}

impl RelayConfig {
    /// Build from process environment variables. Unset variables fall back
    /// to defaults; credentials left empty will simply fail at sync time,
    /// exactly like an empty deployment env would.
    pub fn from_env() -> ServerResult<Self> {
        let bind_addr = match std::env::var("RELAY_BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid RELAY_BIND_ADDR: {raw}")))?,
            Err(_) => default_bind_addr(),
        };
        Ok(Self {
            bind_addr,
            webhook_secret: env_opt("WEBHOOK_SECRET"),
            gitea: GiteaConfig {
                base_url: env_or_default("GITEA_BASE_URL"),
                local_url: env_or_default("GITEA_LOCAL_URL"),
                admin_token: env_or_default("GITEA_ADMIN_TOKEN"),
                repo_owner: env_or_default("GITEA_REPO_OWNER"),
                repo_name: env_or_default("GITEA_REPO_NAME"),
            },
            github: GithubConfig {
                token: env_or_default("GITHUB_TOKEN"),
                repo_owner: env_or_default("GITHUB_REPO_OWNER"),
                repo_name: env_or_default("GITHUB_REPO_NAME"),
            },
        })
    }

    pub fn from_toml_file(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))
    }

    /// The effective secret: `None` when unset *or* empty, in which case
    /// signature verification is bypassed.
    pub fn secret(&self) -> Option<&str> {
        self.webhook_secret.as_deref().filter(|s| !s.is_empty())
    }

    /// Clone URL on the Gitea side, e.g.
    /// `http://gitea.internal:3000/owner/repo.git`.
    pub fn gitea_clone_url(&self) -> String {
        format!(
            "{}/{}/{}.git",
            self.gitea.local_url.trim_end_matches('/'),
            self.gitea.repo_owner,
            self.gitea.repo_name
        )
    }

    /// Push URL on the GitHub side with the token embedded.
    pub fn github_push_url(&self) -> String {
        format!(
            "https://{}@github.com/{}/{}.git",
            self.github.token, self.github.repo_owner, self.github.repo_name
        )
    }
}

fn env_or_default(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RelayConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert!(c.webhook_secret.is_none());
        assert!(c.secret().is_none());
        assert_eq!(c.gitea.base_url, "");
    }

    #[test]
    fn empty_secret_counts_as_unset() {
        let c = RelayConfig {
            webhook_secret: Some(String::new()),
            ..RelayConfig::default()
        };
        assert!(c.secret().is_none());

        let c = RelayConfig {
            webhook_secret: Some("s3cret".into()),
            ..RelayConfig::default()
        };
        assert_eq!(c.secret(), Some("s3cret"));
    }

    #[test]
    fn clone_and_push_urls() {
        let c = RelayConfig {
            gitea: GiteaConfig {
                local_url: "http://gitea.internal:3000/".into(),
                repo_owner: "maple".into(),
                repo_name: "relay".into(),
                ..GiteaConfig::default()
            },
            github: GithubConfig {
                token: "ghp_token".into(),
                repo_owner: "mapleaiorg".into(),
                repo_name: "relay".into(),
            },
            ..RelayConfig::default()
        };
        assert_eq!(c.gitea_clone_url(), "http://gitea.internal:3000/maple/relay.git");
        assert_eq!(
            c.github_push_url(),
            "https://ghp_token@github.com/mapleaiorg/relay.git"
        );
    }

    #[test]
    fn parses_partial_toml() {
        let c: RelayConfig = toml::from_str(
            r#"
            webhook_secret = "hunter2"

            [gitea]
            base_url = "https://gitea.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(c.secret(), Some("hunter2"));
        assert_eq!(c.gitea.base_url, "https://gitea.example.com");
        assert_eq!(c.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.github.token, "");
    }
}
