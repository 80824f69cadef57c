// Layout configuration.
// Loads config.json from the platform config directory (~/.config/velzon on
// Linux), falling back to defaults when the file is absent.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// Terminal width at which the layout switches between the in-flow sidebar
/// and the off-canvas drawer.
pub const DEFAULT_BREAKPOINT: u16 = 80;

/// Sidebar width when expanded, in columns.
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 28;

/// Sidebar width in icon-only collapsed mode, in columns.
pub const DEFAULT_COLLAPSED_WIDTH: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Columns at/above which the sidebar sits in-flow.
    pub breakpoint: u16,
    /// Expanded sidebar width in columns.
    pub sidebar_width: u16,
    /// Collapsed (icon-only) sidebar width in columns.
    pub collapsed_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            collapsed_width: DEFAULT_COLLAPSED_WIDTH,
        }
    }
}

/// Default path of the config file, when a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "velzon").map(|dirs| dirs.config_dir().join("config.json"))
}

impl Config {
    /// Load configuration from the given file, or from the default location
    /// when `path` is None. A missing file yields the defaults; a malformed
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|source| ShellError::Config { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.breakpoint, 80);
        assert_eq!(config.sidebar_width, 28);
        assert_eq!(config.collapsed_width, 6);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"breakpoint": 100}}"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.breakpoint, 100);
        assert_eq!(config.sidebar_width, DEFAULT_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ShellError::Config { .. }));
    }
}
