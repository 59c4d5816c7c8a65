use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::ManagerResult;
use crate::filter::Filter;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: ThemeMode,
    pub window_width: u32,
    pub window_height: u32,
    /// Cards per row
    pub columns: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub initial_filter: Filter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file replacing the built-in catalog
    pub path: Option<String>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            window_width: 1170,
            window_height: 800,
            columns: 3,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("extensions-manager")
            .join("config.toml")
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        let mut config = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        log::warn!("Failed to parse config: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read config: {}", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    pub fn parse(content: &str) -> ManagerResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Clamp values to ranges the window can lay out
    pub fn validate(&mut self) {
        self.appearance.window_width = self.appearance.window_width.clamp(480, 1600);
        self.appearance.window_height = self.appearance.window_height.clamp(360, 1200);
        self.appearance.columns = self.appearance.columns.clamp(1, 4);
    }

    /// Catalog override, with `~` expanded.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let raw = self.catalog.path.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }

    /// Save config to file
    pub fn save_to(&self, path: &std::path::Path) -> ManagerResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}
