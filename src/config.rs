use crate::model::{Category, ConfigError};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "PROJECT_LISTS_CONFIG";
pub const DEFAULT_BASE_URL: &str = "https://freelance-hub.jp";

/// Tracked listing pages as (url path, markup file name), in run order.
/// Three job-type pages followed by three skill pages.
pub const CATALOG: [(&str, &str); 6] = [
    ("/project/job/3/", "network_engineer.html"),
    ("/project/job/44/", "ai_engineer.html"),
    ("/project/job/50/", "pmo.html"),
    ("/project/skill/3/", "java.html"),
    ("/project/skill/4/", "javascript.html"),
    ("/project/skill/7/", "python.html"),
];

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    pub path: String,
    pub file: String,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_store_root")]
    pub store_root: PathBuf,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_root: default_store_root(),
            base_url: default_base_url(),
            categories: default_categories(),
        }
    }
}

impl AppConfig {
    /// Resolves the category entries against `base_url`, keeping declared order.
    pub fn categories(&self) -> Vec<Category> {
        let base = self.base_url.trim_end_matches('/');
        self.categories
            .iter()
            .map(|c| Category::new(format!("{}{}", base, c.path), c.file.clone()))
            .collect()
    }
}

fn default_store_root() -> PathBuf {
    PathBuf::from("store")
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_categories() -> Vec<CategoryConfig> {
    CATALOG
        .iter()
        .map(|(path, file)| CategoryConfig {
            path: path.to_string(),
            file: file.to_string(),
        })
        .collect()
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Loads the config named by `PROJECT_LISTS_CONFIG`, or `config.json` when unset.
/// A missing default file yields the built-in catalog; an explicitly named file must exist.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => load_config(Path::new(&path)),
        None => match load_config(Path::new(DEFAULT_CONFIG_PATH)) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}
