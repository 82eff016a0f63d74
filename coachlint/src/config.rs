//! Configuration loading for `.coachlint.toml`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAME;

/// Top-level configuration struct.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The main configuration section for coachlint.
    #[serde(default)]
    pub coachlint: CoachlintConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

/// Configuration options for coachlint.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CoachlintConfig {
    /// Replaces the default reserved-name set (Python builtins).
    pub reserved_names: Option<Vec<String>>,
    /// Extends the reserved-name set without replacing it.
    pub extra_reserved_names: Option<Vec<String>>,
    /// Replaces the single-letter whitelist. Entries longer than one
    /// character are ignored.
    pub allowed_single_letters: Option<Vec<String>>,
    /// Replaces the generic-name set (matched case-insensitively).
    pub generic_names: Option<Vec<String>>,
    /// Exit with a failure code when any input scores below this tier.
    pub fail_below: Option<String>,
}

impl Config {
    /// Loads configuration by walking up from `path` until a
    /// `.coachlint.toml` is found. Falls back to defaults.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let config_toml = current.join(CONFIG_FILENAME);
            if config_toml.exists() {
                if let Ok(content) = fs::read_to_string(&config_toml) {
                    if let Ok(mut config) = toml::from_str::<Self>(&content) {
                        config.config_file_path = Some(config_toml);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Self::default()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"
[coachlint]
extra_reserved_names = ["frobnicate"]
fail_below = "GOOD"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(
            config.coachlint.extra_reserved_names,
            Some(vec!["frobnicate".to_owned()])
        );
        assert_eq!(config.coachlint.fail_below.as_deref(), Some("GOOD"));
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn test_load_walks_up_from_nested_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[coachlint]\ngeneric_names = [\"widget\"]\n",
        )
        .unwrap();
        let nested = dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();
        let file = nested.join("snippet.py");
        fs::write(&file, "x = 1\n").unwrap();

        let config = Config::load_from_path(&file);
        assert_eq!(
            config.coachlint.generic_names,
            Some(vec!["widget".to_owned()])
        );
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from_path(dir.path());
        assert!(config.coachlint.reserved_names.is_none());
        assert!(config.coachlint.fail_below.is_none());
    }
}
