//! Runtime configuration resolved from arguments and environment.
//!
//! # Responsibility
//! - Decide where the gallery document lives.
//! - Collect logging settings for `init_logging`.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - An explicit path always wins over the environment.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const STORE_PATH_ENV: &str = "GALLERY_STORE_PATH";
pub const LOG_LEVEL_ENV: &str = "GALLERY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "GALLERY_LOG_DIR";

const DEFAULT_STORE_FILE_NAME: &str = "gallery_store.json";

/// Logging settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    /// `None` disables file logging.
    pub log_dir: Option<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_values(non_blank_env(LOG_LEVEL_ENV), non_blank_env(LOG_DIR_ENV))
    }

    fn from_values(level: Option<String>, log_dir: Option<String>) -> Self {
        Self {
            level: level.unwrap_or_else(|| default_log_level().to_string()),
            log_dir,
        }
    }
}

/// Resolves the document path: explicit argument, then `GALLERY_STORE_PATH`,
/// then `<temp>/gallery_store.json`.
pub fn resolve_store_path(explicit: Option<&Path>) -> PathBuf {
    pick_store_path(explicit, non_blank_env(STORE_PATH_ENV))
}

fn pick_store_path(explicit: Option<&Path>, from_env: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match from_env {
        Some(raw) => PathBuf::from(raw),
        None => std::env::temp_dir().join(DEFAULT_STORE_FILE_NAME),
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{pick_store_path, LogSettings, DEFAULT_STORE_FILE_NAME};
    use crate::logging::default_log_level;
    use std::path::{Path, PathBuf};

    #[test]
    fn explicit_path_wins_over_environment() {
        let picked = pick_store_path(
            Some(Path::new("/srv/galleries.json")),
            Some("/env/galleries.json".to_string()),
        );
        assert_eq!(picked, PathBuf::from("/srv/galleries.json"));
    }

    #[test]
    fn environment_then_temp_default() {
        let from_env = pick_store_path(None, Some("/env/galleries.json".to_string()));
        assert_eq!(from_env, PathBuf::from("/env/galleries.json"));

        let fallback = pick_store_path(None, None);
        assert!(fallback.ends_with(DEFAULT_STORE_FILE_NAME));
    }

    #[test]
    fn log_level_defaults_by_build_mode() {
        let settings = LogSettings::from_values(None, None);
        assert_eq!(settings.level, default_log_level());
        assert!(settings.log_dir.is_none());
    }
}
