//! CLI configuration loaded from environment variables.
//!
//! | Variable            | Default   | Description                                   |
//! |---------------------|-----------|-----------------------------------------------|
//! | `TXT2DB_SERVER`     | unset     | Base URL of a txt2db server; unset = embedded |
//! | `TXT2DB_OUTPUT_DIR` | `outputs` | Where batch transcripts are written           |
//! | `TXT2DB_LOG`        | `warn`    | tracing level for stderr logs                 |

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub server: Option<String>,
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self {
            server: std::env::var("TXT2DB_SERVER")
                .ok()
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty()),
            output_dir: PathBuf::from(env_str("TXT2DB_OUTPUT_DIR", "outputs")),
            log_level: env_str("TXT2DB_LOG", "warn"),
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
