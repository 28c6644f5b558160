//! Environment-driven configuration.
//!
//! Tunable settings load via OrthoConfig; the Reddit credential set is read
//! directly from the environment and every variable is required at startup.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_SUBREDDIT: &str = "india";

/// Tunable settings controlling the HTTP surface and the upstream client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "POLICY_FEED")]
pub struct AppSettings {
    /// Socket address the server binds to.
    pub bind_addr: Option<String>,
    /// Community searched when a request names none.
    pub default_subreddit: Option<String>,
    /// Single origin allowed by CORS; any origin when unset.
    pub allowed_origin: Option<String>,
    /// Upstream request timeout in seconds.
    #[ortho_config(default = 30)]
    pub upstream_timeout_seconds: u64,
}

impl AppSettings {
    /// Return the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the configured default subreddit, falling back to the default.
    pub fn default_subreddit(&self) -> &str {
        self.default_subreddit
            .as_deref()
            .unwrap_or(DEFAULT_SUBREDDIT)
    }

    /// Upstream request timeout as a duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

/// Errors raised while loading credentials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// A required variable is unset or blank.
    #[error("missing required environment variable {name}")]
    Missing {
        /// Name of the offending variable.
        name: &'static str,
    },
}

/// Script-app credential set for the Reddit OAuth2 password grant.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    /// OAuth2 client identifier.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// User agent identifying this service to the platform.
    pub user_agent: String,
    /// Account username for the password grant.
    pub username: String,
    /// Account password for the password grant.
    pub password: String,
}

impl RedditCredentials {
    /// Load all five credential variables, failing on the first unset or
    /// blank one.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Missing`] naming the offending variable.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Ok(Self {
            client_id: require_var("REDDIT_CLIENT_ID")?,
            client_secret: require_var("REDDIT_CLIENT_SECRET")?,
            user_agent: require_var("REDDIT_USER_AGENT")?,
            username: require_var("REDDIT_USERNAME")?,
            password: require_var("REDDIT_PASSWORD")?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, CredentialsError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CredentialsError::Missing { name }),
    }
}
