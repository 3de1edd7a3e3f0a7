//! Server configuration loaded from environment variables.
//!
//! | Variable           | Default     | Description                      |
//! |--------------------|-------------|----------------------------------|
//! | `TXT2DB_HOST`      | `127.0.0.1` | Interface to bind                |
//! | `TXT2DB_PORT`      | `8080`      | HTTP port                        |
//! | `TXT2DB_LOG_LEVEL` | `info`      | tracing filter (`EnvFilter` syntax) |

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env_str("TXT2DB_HOST", "127.0.0.1"),
            port: env_parse("TXT2DB_PORT", 8080),
            log_level: env_str("TXT2DB_LOG_LEVEL", "info"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_values_fall_back_to_default() {
        assert_eq!(env_parse("TXT2DB_TEST_UNSET_PORT", 8080u16), 8080);
        assert_eq!(env_str("TXT2DB_TEST_UNSET_HOST", "127.0.0.1"), "127.0.0.1");
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = Config {
            host: "0.0.0.0".into(),
            port: 9090,
            log_level: "info".into(),
        };
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9090");
    }
}
