use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use thiserror::Error;

/// File name of the SQLite store inside the data directory.
pub const DATABASE_FILE: &str = "inventory.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let host = match env_map.get("HOST") {
            Some(s) => s.parse::<IpAddr>().map_err(|_| {
                ConfigError::InvalidValue("HOST".to_string(), "must be an IP address".to_string())
            })?,
            None => defaults.host,
        };

        let port = match env_map.get("PORT") {
            Some(s) => s.parse::<u16>().map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?,
            None => defaults.port,
        };

        let data_dir = match env_map.get("DATA_DIR").map(|s| s.trim()) {
            Some("") => {
                return Err(ConfigError::InvalidValue(
                    "DATA_DIR".to_string(),
                    "must not be empty".to_string(),
                ))
            }
            Some(dir) => PathBuf::from(dir),
            None => defaults.data_dir,
        };

        Ok(Config {
            host,
            port,
            data_dir,
        })
    }

    /// Path of the store file, `<data_dir>/inventory.db`.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
