//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MINIMART_DATABASE_URL` - `PostgreSQL` connection string
//!
//! ## Optional
//! - `MINIMART_HOST` - Bind address (default: 127.0.0.1)
//! - `MINIMART_PORT` - Listen port (default: 3000)
//! - `MINIMART_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `MINIMART_ADMIN_TOKEN` - Token gating the `/manage` routes; when unset
//!   the admin panel is open (development mode)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_ADMIN_TOKEN_LENGTH: usize = 16;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the server
    pub base_url: String,
    /// Admin access token; `None` leaves the `/manage` routes open
    pub admin_token: Option<SecretString>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the admin token fails validation (length, placeholder detection).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_required_env("MINIMART_DATABASE_URL").map(SecretString::from)?;
        let host = get_env_or_default("MINIMART_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MINIMART_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MINIMART_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MINIMART_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("MINIMART_BASE_URL", "http://localhost:3000");

        let admin_token = match get_optional_env("MINIMART_ADMIN_TOKEN") {
            Some(token) => {
                validate_admin_token(&token, "MINIMART_ADMIN_TOKEN")?;
                Some(SecretString::from(token))
            }
            None => None,
        };

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            admin_token,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// True when the admin routes require a token.
    #[must_use]
    pub const fn admin_gated(&self) -> bool {
        self.admin_token.is_some()
    }

    /// True if the configured admin token matches `candidate`.
    ///
    /// Always false when no token is configured; callers decide what an
    /// ungated panel means.
    #[must_use]
    pub fn admin_token_matches(&self, candidate: &str) -> bool {
        self.admin_token
            .as_ref()
            .is_some_and(|token| token.expose_secret() == candidate)
    }
}

fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Reject short or obviously-placeholder admin tokens.
fn validate_admin_token(token: &str, var_name: &str) -> Result<(), ConfigError> {
    if token.len() < MIN_ADMIN_TOKEN_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("must be at least {MIN_ADMIN_TOKEN_LENGTH} characters"),
        ));
    }

    let lower = token.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("looks like a placeholder value (contains \"{pattern}\")"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_admin_token_rejects_short() {
        let err = validate_admin_token("abc", "MINIMART_ADMIN_TOKEN");
        assert!(matches!(err, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_admin_token_rejects_placeholder() {
        let err = validate_admin_token("changeme-changeme-changeme", "MINIMART_ADMIN_TOKEN");
        assert!(matches!(err, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_admin_token_accepts_random() {
        assert!(validate_admin_token("kqz81vn3m7p0d4tw9rh2", "MINIMART_ADMIN_TOKEN").is_ok());
    }

    #[test]
    fn test_admin_token_matches() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/minimart"),
            host: "127.0.0.1".parse().expect("valid ip"),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            admin_token: Some(SecretString::from("kqz81vn3m7p0d4tw9rh2")),
            sentry_dsn: None,
            sentry_environment: None,
        };

        assert!(config.admin_gated());
        assert!(config.admin_token_matches("kqz81vn3m7p0d4tw9rh2"));
        assert!(!config.admin_token_matches("wrong"));
    }
}
