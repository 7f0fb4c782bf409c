use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const BASE_URL_ENV: &str = "FAQCHAT_BASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub catalog: CatalogConfig,
    pub suggestions: SuggestionConfig,
    pub dictation: DictationConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    // File path or http(s) URL
    pub location: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            location: "keywords.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    pub debounce_ms: u64,
    pub submit_on_accept: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            submit_on_accept: false,
        }
    }
}

impl SuggestionConfig {
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictationConfig {
    // argv of a speech-to-text program printing one utterance per line
    pub command: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub directory: Option<PathBuf>,
}

impl LogConfig {
    #[must_use]
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            home::home_dir()
                .map(|mut path| {
                    path.push(".local");
                    path.push("state");
                    path.push("faqchat");
                    path
                })
                .unwrap_or_else(std::env::temp_dir)
        })
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("faqchat");
        path.push("config.toml");
        path
    })
}

impl Config {
    /// Loads the user config (defaults for anything missing), then applies
    /// the environment override.
    pub fn load() -> Result<Self> {
        let mut config = match get_config_path() {
            Some(path) => Self::load_from(&path)?.unwrap_or_default(),
            None => Self::default(),
        };
        config.apply_env(std::env::var(BASE_URL_ENV).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str::<Config>(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn apply_env(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.backend.base_url = url.trim().to_string();
        }
    }
}
