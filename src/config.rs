use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://freemusicarchive.org/search?adv=1\
    &music-filter-CC-attribution-only=1\
    &music-filter-CC-attribution-sharealike=1\
    &music-filter-CC-attribution-noderivatives=1\
    &music-filter-public-domain=1\
    &music-filter-commercial-allowed=1";
pub const DEFAULT_IMAGE_URL: &str = "https://freemusicarchive.org/legacy/fma-smaller.jpg";
pub const DEFAULT_CANDIDATE_SELECTOR: &str = "div.play-item.gcol.gid-electronic";
pub const DEFAULT_TRACK_INFO_ATTR: &str = "data-track-info";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub resources: ResourceConfig,
}

/// Endpoint and page layout the provider scrapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub image_url: String,
    pub candidate_selector: String,
    pub track_info_attr: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            candidate_selector: DEFAULT_CANDIDATE_SELECTOR.to_string(),
            track_info_attr: DEFAULT_TRACK_INFO_ATTR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("fma-search/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directory holding one subdirectory of `.voc` files per language.
    pub dir: PathBuf,
    pub lang: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/locale")),
            lang: "en-us".to_string(),
        }
    }
}

pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".config")
        .join("fma-search")
        .join("config.toml")
}

pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            warn!("ignoring invalid config {}: {}", path.display(), e);
            Config::default()
        }),
        Err(e) => {
            warn!("could not read config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: Config = toml::from_str("[resources]\nlang = \"de-de\"\n").unwrap();
        assert_eq!(cfg.resources.lang, "de-de");
        assert_eq!(cfg.resources.dir, ResourceConfig::default().dir);
        assert!(cfg.resources.dir.is_absolute());
        assert_eq!(cfg.provider, ProviderSettings::default());
        assert_eq!(cfg.http.timeout_secs, 10);
    }

    #[test]
    fn test_default_base_url_is_one_line() {
        assert!(DEFAULT_BASE_URL.starts_with("https://freemusicarchive.org/search?adv=1&"));
        assert!(!DEFAULT_BASE_URL.contains(char::is_whitespace));
        assert!(DEFAULT_BASE_URL.ends_with("&music-filter-commercial-allowed=1"));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.provider.base_url = "http://localhost:8080/search?adv=1".to_string();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.provider, cfg.provider);
    }
}
