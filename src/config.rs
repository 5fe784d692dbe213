use crate::error::{CatalogError, Result};
use beer_catalog_common::{BeerId, DEFAULT_BASE_URL, INITIAL_BEER_ID};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// ストアURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "BEER_CATALOG_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub initial_beer_id: BeerId,
    /// 未設定ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            initial_beer_id: INITIAL_BEER_ID,
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("beer-catalog").join("config.json"))
    }

    /// 接続先を決定（フラグ > 環境変数 > 設定ファイル）
    pub fn resolve_base_url(&self, flag: Option<&str>) -> String {
        self.resolve_base_url_with(flag, std::env::var(BASE_URL_ENV).ok())
    }

    fn resolve_base_url_with(&self, flag: Option<&str>, env: Option<String>) -> String {
        if let Some(url) = flag {
            return url.to_string();
        }
        match env {
            Some(url) if !url.trim().is_empty() => url,
            _ => self.base_url.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        validate_base_url(&url)?;
        self.base_url = url;
        self.save()
    }
}

fn validate_base_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(CatalogError::InvalidBaseUrl(url.to_string()))
    }
}
