use serde::Deserialize;

use crate::models::CategorySchema;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Game catalog CSV (`Game,<category>,...`)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Ownership records CSV (`Username,Game`). Empty keeps records in memory only.
    #[serde(default = "default_ownership_path")]
    pub ownership_path: String,

    /// Game descriptions file (`name;image;description`)
    #[serde(default = "default_descriptions_path")]
    pub descriptions_path: String,

    /// Expected catalog categories, comma separated. Unset trusts the catalog header.
    #[serde(default)]
    pub categories: Option<Vec<String>>,

    /// Recommendations per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> String {
    "Games_dataset.csv".to_string()
}

fn default_ownership_path() -> String {
    "dataset.csv".to_string()
}

fn default_descriptions_path() -> String {
    "games_desc.csv".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.page_size == 0 {
            anyhow::bail!("PAGE_SIZE must be at least 1");
        }

        Ok(config)
    }

    /// Configured category schema, if any
    pub fn category_schema(&self) -> Option<CategorySchema> {
        self.categories
            .as_ref()
            .map(|names| CategorySchema::new(names.iter().map(|n| n.trim())))
    }

    /// Socket address to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
