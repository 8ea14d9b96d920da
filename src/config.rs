//! Runtime configuration, read from a TOML file.
//!
//! ```toml
//! levenshtein_threshold = 3
//! cache_path = "cache.json"
//! debug = false
//! ```
//!
//! Every key is optional; unknown keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cache::Cache;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Largest weighted edit distance still accepted as a match.
    pub levenshtein_threshold: usize,
    /// Where the cache snapshot is persisted.
    pub cache_path: PathBuf,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            levenshtein_threshold: 3,
            cache_path: PathBuf::from("cache.json"),
            debug: false,
        }
    }
}

impl Config {
    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Build an empty cache from this configuration.
    pub fn cache<R>(&self) -> Cache<R> {
        Cache::new(self.cache_path.clone(), self.levenshtein_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::champion::Champion;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").expect("empty TOML is valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.levenshtein_threshold, 3);
        assert_eq!(config.cache_path, PathBuf::from("cache.json"));
    }

    #[test]
    fn keys_override_defaults() {
        let config = Config::from_toml(
            r#"
            levenshtein_threshold = 1
            cache_path = "/var/cache/champs.json"
            debug = true
            listen_addr = "127.0.0.1"
            "#,
        )
        .expect("valid TOML");
        assert_eq!(config.levenshtein_threshold, 1);
        assert_eq!(config.cache_path, PathBuf::from("/var/cache/champs.json"));
        assert!(config.debug);
    }

    #[test]
    fn legacy_language_code_is_ignored() {
        let config = Config::from_toml("language_code = \"ko_KR\"").expect("valid TOML");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn negative_threshold_is_rejected() {
        assert!(Config::from_toml("levenshtein_threshold = -1").is_err());
    }

    #[test]
    fn builds_cache_with_configured_threshold() {
        let config = Config {
            levenshtein_threshold: 5,
            ..Config::default()
        };
        let cache: Cache<Champion> = config.cache();
        assert_eq!(cache.threshold(), 5);
        assert_eq!(cache.path(), Path::new("cache.json"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "got {err:?}");
    }
}
