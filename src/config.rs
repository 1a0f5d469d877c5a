use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub orders: OrderServiceConfig,
}

/// Product catalog service listener
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    pub host: String,
    pub port: u16,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}

/// Order service listener plus its downstream catalog endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderServiceConfig {
    pub host: String,
    pub port: u16,
    pub catalog_base_url: String,
    /// Connect and read timeout for catalog lookups
    pub catalog_timeout_ms: u64,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8082,
            catalog_base_url: "http://localhost:8081".to_string(),
            catalog_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}
