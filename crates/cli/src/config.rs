//! Configuration file support for internpath.
//!
//! Loads settings from `~/.internpath/config.toml` with the following precedence:
//! CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.internpath/config.toml
//!
//! [engine]
//! # Skill catalog replacing the built-in course table
//! catalog_path = "/path/to/catalog.toml"
//!
//! [output]
//! # "text" or "json"
//! format = "json"
//! # Maximum recommendations shown by `recommend`
//! limit = 10
//!
//! [digest]
//! # Lines in the notification digest
//! top_n = 3
//! ```

use anyhow::{Context, Result};
use internpath_state::internpath_dir;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Digest configuration.
    #[serde(default)]
    pub digest: DigestConfig,
}

/// Configuration for the recommendation engine.
#[derive(Debug, Default, Deserialize)]
pub struct EngineConfig {
    /// Path to a TOML skill catalog.
    pub catalog_path: Option<String>,
}

/// Configuration for command output.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// `text` or `json`.
    pub format: Option<String>,
    /// Maximum number of recommendations shown.
    pub limit: Option<usize>,
}

/// Configuration for the notification digest.
#[derive(Debug, Default, Deserialize)]
pub struct DigestConfig {
    /// Number of digest lines.
    pub top_n: Option<usize>,
}

/// Returns the path to the config file (~/.internpath/config.toml).
fn config_path() -> Option<PathBuf> {
    internpath_dir().ok().map(|dir| dir.join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Ok(Some(config))` if the file exists and parses successfully.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file. Returns the keys that were set.
///
/// This must run before parsing CLI arguments, which read these variables.
pub fn apply_config_to_env() -> Result<Vec<&'static str>> {
    Ok(match load_config()? {
        Some(config) => apply(&config),
        None => Vec::new(),
    })
}

fn apply(config: &Config) -> Vec<&'static str> {
    let mut applied = Vec::new();
    let mut set_if_absent = |key: &'static str, value: String| {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            applied.push(key);
        }
    };

    if let Some(ref path) = config.engine.catalog_path {
        set_if_absent("INTERNPATH_CATALOG", path.clone());
    }
    if let Some(ref format) = config.output.format {
        set_if_absent("INTERNPATH_FORMAT", format.clone());
    }
    if let Some(limit) = config.output.limit {
        set_if_absent("INTERNPATH_LIMIT", limit.to_string());
    }
    if let Some(top_n) = config.digest.top_n {
        set_if_absent("INTERNPATH_DIGEST_TOP_N", top_n.to_string());
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use internpath_test_utils::{env_guard, set_env_var, TestFixture};

    #[test]
    fn config_path_is_under_internpath_dir() {
        let _g = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();
        assert_eq!(
            config_path().unwrap(),
            fixture.internpath_dir.join("config.toml")
        );
    }

    #[test]
    fn parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.engine.catalog_path.is_none());
        assert!(config.output.limit.is_none());
        assert!(config.digest.top_n.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [engine]
            catalog_path = "/data/catalog.toml"

            [output]
            format = "json"
            limit = 5

            [digest]
            top_n = 2
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.engine.catalog_path.as_deref(),
            Some("/data/catalog.toml")
        );
        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert_eq!(config.output.limit, Some(5));
        assert_eq!(config.digest.top_n, Some(2));
    }

    #[test]
    fn load_missing_config_returns_none() {
        let _g = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();
        assert!(load_config().unwrap().is_none());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let _g = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();
        fixture.write_config("[output\nlimit = ").unwrap();
        let err = load_config().unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn config_does_not_override_environment() {
        let _g = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();
        fixture
            .write_config("[output]\nformat = \"json\"\nlimit = 4\n\n[digest]\ntop_n = 7\n")
            .unwrap();

        let _format = set_env_var("INTERNPATH_FORMAT", Some("text"));
        let _limit = set_env_var("INTERNPATH_LIMIT", None);
        let _top = set_env_var("INTERNPATH_DIGEST_TOP_N", None);
        let _catalog = set_env_var("INTERNPATH_CATALOG", None);

        let applied = apply_config_to_env().unwrap();
        assert_eq!(applied, vec!["INTERNPATH_LIMIT", "INTERNPATH_DIGEST_TOP_N"]);
        assert_eq!(std::env::var("INTERNPATH_FORMAT").unwrap(), "text");
        assert_eq!(std::env::var("INTERNPATH_LIMIT").unwrap(), "4");
        assert_eq!(internpath_state::env_digest_top_n(), 7);
    }
}
