use crate::history::DEFAULT_UNDO_LIMIT;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuillConfig {
    pub undo_limit: usize,
    pub tab_width: usize,
    pub theme: ThemeConfig,
}

/// Colour overrides, as ratatui colour names or `#rrggbb`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub selection_bg: Option<String>,
    pub selection_fg: Option<String>,
    pub status_bar_bg: Option<String>,
    pub status_bar_fg: Option<String>,
    pub menu_bg: Option<String>,
    pub menu_fg: Option<String>,
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            undo_limit: DEFAULT_UNDO_LIMIT,
            tab_width: 4,
            theme: ThemeConfig::default(),
        }
    }
}

impl QuillConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `explicit` if given, else the first config file found on disk,
    /// else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or_else(find_config_file) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("quill")
}

pub fn find_config_file() -> Option<PathBuf> {
    let mut paths = vec![get_config_dir().join("config.toml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".quill").join("config.toml"));
    }

    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = QuillConfig::from_toml("").unwrap();
        assert_eq!(config, QuillConfig::default());
        assert_eq!(config.undo_limit, DEFAULT_UNDO_LIMIT);
        assert_eq!(config.tab_width, 4);
    }

    #[test]
    fn test_partial_config() {
        let config = QuillConfig::from_toml(
            r#"
            tab_width = 0

            [theme]
            selection_bg = "green"
            "#,
        )
        .unwrap();
        assert_eq!(config.tab_width, 0);
        assert_eq!(config.undo_limit, DEFAULT_UNDO_LIMIT);
        assert_eq!(config.theme.selection_bg.as_deref(), Some("green"));
        assert_eq!(config.theme.status_bar_bg, None);
    }

    #[test]
    fn test_menu_colours() {
        let config = QuillConfig::from_toml(
            r##"
            [theme]
            menu_bg = "black"
            menu_fg = "#ffcc00"
            "##,
        )
        .unwrap();
        assert_eq!(config.theme.menu_bg.as_deref(), Some("black"));
        assert_eq!(config.theme.menu_fg.as_deref(), Some("#ffcc00"));
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let err = QuillConfig::from_toml("undo_limit = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quill.toml");
        fs::write(&path, "undo_limit = 5").unwrap();
        let config = QuillConfig::load(Some(&path)).unwrap();
        assert_eq!(config.undo_limit, 5);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = QuillConfig::load(Some(Path::new("/nonexistent/quill.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
