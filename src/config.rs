//! Server configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Only `LISTEN_ADDR` is validated strictly; every other key
//! falls back to its default when missing or unparsable.

use std::net::SocketAddr;

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string for the media post table.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Whether the in-memory text post store starts with the canned posts.
    pub seed_text_posts: bool,

    /// Request body limit for `POST /upload`, in bytes.
    pub upload_max_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            database_url: "sqlite://postboard.db".to_string(),
            database_max_connections: 5,
            database_connect_timeout_secs: 5,
            seed_text_posts: true,
            upload_max_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.listen_addr,
        };

        let database_url = std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections: parse_env(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            ),
            database_connect_timeout_secs: parse_env(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                defaults.database_connect_timeout_secs,
            ),
            seed_text_posts: parse_env_bool("SEED_TEXT_POSTS", defaults.seed_text_posts),
            upload_max_bytes: parse_env("UPLOAD_MAX_BYTES", defaults.upload_max_bytes),
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => true,
        "false" | "0" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.listen_addr.port(), 8000);
        assert_eq!(cfg.database_url, "sqlite://postboard.db");
        assert!(cfg.seed_text_posts);
        assert_eq!(cfg.upload_max_bytes, 10_485_760);
    }

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value: u32 = parse_env("POSTBOARD_TEST_SURELY_UNSET_KEY", 7);
        assert_eq!(value, 7);
        assert!(parse_env_bool("POSTBOARD_TEST_SURELY_UNSET_BOOL", true));
    }
}
