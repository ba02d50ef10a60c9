use crate::export::DotOptions;
use crate::utils::TokenMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "gstree";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// How input text is split into tokens
    #[serde(default)]
    pub token_mode: TokenMode,

    /// Lowercase every token before indexing
    #[serde(default)]
    pub fold_case: bool,

    /// Emit suffix links in dot output
    #[serde(default = "default_true")]
    pub dot_suffix_links: bool,

    /// Emit incoming-edge-to-parent links in dot output
    #[serde(default)]
    pub dot_incoming_edge_links: bool,

    /// Colorize terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token_mode: TokenMode::default(),
            fold_case: false,
            dot_suffix_links: default_true(),
            dot_incoming_edge_links: false,
            color: default_true(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load config from an explicit path, or return default if not found
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Dot export options derived from this config
    pub fn dot_options(&self) -> DotOptions {
        DotOptions {
            suffix_links: self.dot_suffix_links,
            incoming_edge_links: self.dot_incoming_edge_links,
            separator: self.token_mode.separator().to_string(),
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.token_mode, TokenMode::Chars);
        assert!(!config.fold_case);
        assert!(config.dot_suffix_links);
        assert!(!config.dot_incoming_edge_links);
    }

    #[test]
    fn test_app_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{"token_mode": "words", "dot_suffix_links": false}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.token_mode, TokenMode::Words);
        assert!(!config.dot_suffix_links);
        assert!(config.color); // default
    }

    #[test]
    fn test_app_config_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_app_config_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = AppConfig {
            token_mode: TokenMode::Identifiers,
            fold_case: true,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_dot_options_follow_token_mode() {
        let config = AppConfig {
            token_mode: TokenMode::Words,
            ..Default::default()
        };
        assert_eq!(config.dot_options().separator, " ");
    }
}
