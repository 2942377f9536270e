use anyhow::Context;
use aroi_composer::{ShellOptions, StorefrontConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "aroi.config.json";
pub const DEFAULT_CATALOG_NAME: &str = "catalog.json";

/// Aroi project file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog JSON file; the built-in menu is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Where `render` writes index.html
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default)]
    pub storefront: StorefrontConfig,

    #[serde(default)]
    pub shell: ShellOptions,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(dir: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(dir).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Cannot read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {}", config_path.display()))?;
            tracing::info!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Catalog path resolved against the config directory
    pub fn catalog_path(&self, dir: &str) -> Option<PathBuf> {
        self.catalog.as_ref().map(|catalog| resolve(dir, catalog))
    }

    pub fn out_dir(&self, dir: &str) -> PathBuf {
        resolve(dir, &self.out_dir)
    }
}

fn resolve(dir: &str, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(dir).join(path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            out_dir: default_out_dir(),
            storefront: StorefrontConfig::default(),
            shell: ShellOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "catalog": "menu/catalog.json",
            "outDir": "public",
            "storefront": { "title": "Aroi Express" },
            "shell": { "clientModule": "/static/aroi_wasm.js" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.catalog.as_deref(), Some("menu/catalog.json"));
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.storefront.title, "Aroi Express");
        assert_eq!(config.storefront.logo, "🍜");
        assert_eq!(config.shell.client_module, "/static/aroi_wasm.js");
        assert_eq!(config.shell.title, "Food Delivery App");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let config = Config {
            catalog: Some("catalog.json".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.catalog_path("/site"),
            Some(PathBuf::from("/site/catalog.json"))
        );
        assert_eq!(config.out_dir("/site"), PathBuf::from("/site/dist"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = std::env::temp_dir().join("aroi-config-missing");
        let config = Config::load(&dir.display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }
}
