//! Runtime configuration. There is no config file: the only knobs are where
//! the log files go and how chatty they are.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".book-buddy";
/// Subfolder of the data directory holding rotated log files.
const LOG_DIR_NAME: &str = "logs";
/// Environment variable that overrides the default log level.
pub const LOG_LEVEL_ENV: &str = "BOOK_BUDDY_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl Config {
    /// Resolve the log directory inside the user's home and pick the log
    /// level, honouring `BOOK_BUDDY_LOG` when it is set.
    pub fn load() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        let log_dir = base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_DIR_NAME);

        let log_level = match env::var(LOG_LEVEL_ENV) {
            Ok(raw) => normalize_level(&raw)
                .map_err(|err| anyhow!("invalid {LOG_LEVEL_ENV}: {err}"))?,
            Err(_) => default_log_level(),
        };

        Ok(Self { log_dir, log_level })
    }
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("TRACE"), Ok("trace"));
        assert_eq!(normalize_level(" info "), Ok("info"));
        assert_eq!(normalize_level("warning"), Ok("warn"));
        assert_eq!(normalize_level("error"), Ok("error"));
    }

    #[test]
    fn normalize_level_rejects_unknown_values() {
        let err = normalize_level("loud").unwrap_err();
        assert!(err.contains("loud"));
    }

    #[test]
    fn default_level_is_a_known_level() {
        assert_eq!(normalize_level(default_log_level()), Ok(default_log_level()));
    }
}
