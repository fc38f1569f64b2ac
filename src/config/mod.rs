// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::io;
use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// Config file looked up in the working directory (any extension `config` understands)
pub const DEFAULT_CONFIG_FILE: &str = "fixture";

/// Prefix for environment overrides, e.g. `FIXTURE_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "FIXTURE";

impl Config {
    /// Load configuration from `fixture.toml` (optional) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// A missing file is not an error: every key has a default, and the
    /// defaults reproduce the fixed `localhost:8000` fixture.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", types::DEFAULT_ACCESS_LOG_FORMAT)?
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve `server.host:server.port` to the address to bind
    ///
    /// Hostnames such as `localhost` may resolve to several addresses; IPv4 is
    /// preferred, otherwise the first result wins.
    pub async fn resolve_socket_addr(&self) -> io::Result<SocketAddr> {
        let target = format!("{}:{}", self.server.host, self.server.port);
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(&target).await?.collect();

        addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("Invalid address: {target} did not resolve"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/fixture").unwrap();
        assert_eq!(cfg.server.host, "localhost");
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.server.workers.is_none());
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "fixture");
        assert!(cfg.logging.access_log_file.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("fixture-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9001\nworkers = 2\n\n[logging]\naccess_log_format = \"json\"\n",
        )
        .unwrap();

        let base = dir.join("custom");
        let cfg = Config::load_from(base.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.host, "localhost");
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.logging.access_log_format, "json");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_resolve_ip_literal() {
        let mut cfg = Config::default();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 0;
        let addr = cfg.resolve_socket_addr().await.unwrap();
        assert_eq!(addr, "127.0.0.1:0".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_resolve_rejects_invalid_host() {
        let mut cfg = Config::default();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.resolve_socket_addr().await.is_err());
    }
}
