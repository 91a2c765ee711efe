//! Lucy configuration.
//!
//! Loaded from `~/.lucy/config.toml`. Every key is optional and a missing
//! file means defaults.
//!
//! The asset root is resolved through a chain:
//!
//! 1. `--assets <dir>` on the command line
//! 2. `LUCY_ASSETS` env var
//! 3. `asset-root` in the config file
//! 4. the current directory

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};

/// Filter used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Lucy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Directory holding `title.png`, `jumpscare.png` and `assets/`.
    pub asset_root: Option<PathBuf>,

    /// Where logs go while the terminal UI owns the screen.
    pub log_file: Option<PathBuf>,

    /// A `tracing` filter directive, e.g. `"lucy=debug"`.
    pub log_filter: Option<String>,
}

impl Config {
    /// Load config from `~/.lucy/config.toml`, or defaults if there is none.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The Lucy home directory: `~/.lucy/`.
    pub fn dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".lucy"))
    }

    /// The config file path: `~/.lucy/config.toml`.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Resolve the asset root from the resolution chain.
    pub fn asset_root(&self, explicit: Option<&Path>) -> PathBuf {
        resolve_asset_root(explicit, env::var_os("LUCY_ASSETS").map(PathBuf::from), self)
    }

    /// The log file, defaulting to `~/.lucy/lucy.log`.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::dir().map(|d| d.join("lucy.log")))
    }

    /// The log filter directive from config, or the default.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

fn resolve_asset_root(explicit: Option<&Path>, from_env: Option<PathBuf>, config: &Config) -> PathBuf {
    // 1. Explicit --assets flag.
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    // 2. LUCY_ASSETS environment variable.
    if let Some(dir) = from_env
        && !dir.as_os_str().is_empty()
    {
        return dir;
    }

    // 3. Config file, then 4. the working directory.
    config
        .asset_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn reads_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "asset-root = \"/srv/lucy\"\nlog-filter = \"lucy=debug\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.asset_root, Some(PathBuf::from("/srv/lucy")));
        assert_eq!(config.log_filter(), "lucy=debug");
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "darkness = 8\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.starts_with("invalid config at"));
    }

    #[test]
    fn explicit_asset_root_wins() {
        let config = Config {
            asset_root: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let root = resolve_asset_root(
            Some(Path::new("/explicit")),
            Some(PathBuf::from("/from/env")),
            &config,
        );
        assert_eq!(root, PathBuf::from("/explicit"));
    }

    #[test]
    fn env_beats_config() {
        let config = Config {
            asset_root: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let root = resolve_asset_root(None, Some(PathBuf::from("/from/env")), &config);
        assert_eq!(root, PathBuf::from("/from/env"));
    }

    #[test]
    fn empty_env_is_skipped() {
        let config = Config {
            asset_root: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let root = resolve_asset_root(None, Some(PathBuf::new()), &config);
        assert_eq!(root, PathBuf::from("/from/config"));
    }

    #[test]
    fn falls_back_to_working_directory() {
        let root = resolve_asset_root(None, None, &Config::default());
        assert_eq!(root, PathBuf::from("."));
    }
}
