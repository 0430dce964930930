//! Server configuration.
//!
//! Settings come from a TOML file (path in `SOURCES_CONFIG`, else
//! `./sources.toml` when it exists) and are then overridden field by field from
//! `SOURCES_HOST`, `SOURCES_PORT`, `SOURCES_DB` and `SOURCES_SEED`. Every field
//! has a default, so neither the file nor the variables are required.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "sources.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {var}")]
    Env { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file holding categories, sources and passages.
    pub database_path: PathBuf,
    /// TOML seed applied on startup, if set.
    pub seed_file: Option<PathBuf>,
    /// Open the site in the default browser once the server is up.
    pub open_browser: bool,
    /// Largest JSON request body accepted.
    pub json_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("sources.sqlite"),
            seed_file: None,
            open_browser: false,
            json_limit_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_with(&env)
    }

    /// Same as [`Config::load`] but reading variables from `env`.
    pub fn load_with(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let explicit = env.get("SOURCES_CONFIG").map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Config::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env(&mut self, env: &HashMap<String, String>) -> Result<(), ConfigError> {
        if let Some(host) = env.get("SOURCES_HOST") {
            self.host = host.clone();
        }
        if let Some(port) = env.get("SOURCES_PORT") {
            self.port = port.parse().map_err(|_| ConfigError::Env {
                var: "SOURCES_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(db) = env.get("SOURCES_DB") {
            self.database_path = PathBuf::from(db);
        }
        if let Some(seed) = env.get("SOURCES_SEED") {
            self.seed_file = (!seed.is_empty()).then(|| PathBuf::from(seed));
        }
        Ok(())
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
