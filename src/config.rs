use std::net::SocketAddr;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Server configuration, read from environment variables with defaults
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// When unset the server runs on the in-memory store
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unparseable values fall back
    /// to their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let addr = lookup("SCOREBOARD_ADDR")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.addr);

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_connections);

        Self {
            addr,
            database_url,
            max_connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn test_default_addr_listens_on_port_3000() {
        assert_eq!(
            AppConfig::default().addr,
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_reads_all_values() {
        let config = config_from(&[
            ("SCOREBOARD_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "postgres://localhost/scores"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]);

        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/scores")
        );
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("SCOREBOARD_ADDR", "not-an-address"),
            ("DATABASE_URL", "  "),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]);

        assert_eq!(config, AppConfig::default());
    }
}
