//! Connection pool configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Database connection settings shared by both stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Maximum pooled connections per store
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long to wait when opening a connection
    #[serde(with = "humantime_serde", default = "default_connect_timeout")]
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

// Each store is used by a single logical thread of control
fn default_max_connections() -> u32 {
    1
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_empty_table() {
        let config: DatabaseConfig = toml::from_str("").unwrap();
        assert_eq!(config, DatabaseConfig::default());
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_humantime_timeout() {
        let config: DatabaseConfig =
            toml::from_str("max_connections = 4\nconnect_timeout = \"5s\"").unwrap();
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }
}
