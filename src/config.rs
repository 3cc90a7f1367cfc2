use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::database::DatabaseBackendConfig;
use crate::backend::memory::SeedData;
use crate::backend::{DatabaseType, StoreType};
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for every route, e.g. "/api/v1"
    #[serde(default)]
    pub base_path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    /// "list", "jdbc" or "jpa"
    #[serde(rename = "type")]
    pub store_type: String,
    /// Initial records of the list store
    #[serde(default)]
    pub seed: SeedData,
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub db_type: String,
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self, String> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Parse YAML content after expanding environment variables
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let expanded_content = Self::expand_env_vars(content)?;

        let app_config: AppConfig =
            serde_yaml::from_str(&expanded_content).map_err(|e| e.to_string())?;

        app_config.validate().map_err(|e| e.to_string())?;
        Ok(app_config)
    }

    /// Create default configuration: seeded list store on 127.0.0.1:8080
    pub fn default_config() -> Self {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                base_path: String::new(),
            },
            store: StoreConfig {
                store_type: "list".to_string(),
                seed: SeedData::WithAge,
                database: None,
            },
        }
    }

    /// Check that the selected store has everything it needs
    pub fn validate(&self) -> AppResult<()> {
        let store_type = self.store_type()?;
        if store_type != StoreType::List {
            self.database_backend_config()?;
        }

        if !self.server.base_path.is_empty() && !self.server.base_path.starts_with('/') {
            return Err(AppError::Configuration(format!(
                "base_path must start with '/': {}",
                self.server.base_path
            )));
        }

        Ok(())
    }

    pub fn store_type(&self) -> AppResult<StoreType> {
        self.store.store_type.parse()
    }

    /// Build the backend configuration for a relational store
    pub fn database_backend_config(&self) -> AppResult<DatabaseBackendConfig> {
        let database = self.store.database.as_ref().ok_or_else(|| {
            AppError::Configuration(format!(
                "Database configuration is required when store type is '{}'",
                self.store.store_type
            ))
        })?;

        let database_type: DatabaseType = database.db_type.parse()?;
        Ok(
            DatabaseBackendConfig::new(database_type, database.url.clone())
                .with_max_connections(database.max_connections)
                .with_connection_timeout(database.connection_timeout),
        )
    }

    /// Route prefix without a trailing slash
    pub fn base_path(&self) -> &str {
        self.server.base_path.trim_end_matches('/')
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> Result<String, String> {
        let mut expanded = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find("${") {
            expanded.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find('}') else {
                // Unterminated expression, keep it verbatim
                expanded.push_str(&rest[start..]);
                return Ok(expanded);
            };

            let var_expr = &after[..end];
            let (var_name, default_value) = match var_expr.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (var_expr, None),
            };

            let value = match std::env::var(var_name) {
                Ok(val) => val,
                Err(_) => default_value.map(str::to_string).ok_or_else(|| {
                    format!(
                        "Environment variable {} not found and no default provided",
                        var_name
                    )
                })?,
            };

            expanded.push_str(&value);
            rest = &after[end + 1..];
        }

        expanded.push_str(rest);
        Ok(expanded)
    }
}
