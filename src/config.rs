use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be set")]
    MissingPort,

    #[error("Invalid port in PORT variable: {0:?}")]
    InvalidPort(String),

    #[error("Invalid byte count in MAX_UPLOAD_BYTES variable: {0:?}")]
    InvalidUploadLimit(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    // Root of the artifact tree; also the static file root.
    pub data_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        Config::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT").ok_or(ConfigError::MissingPort)?;
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        let data_dir = lookup("DATA_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidUploadLimit(raw.clone()))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Config {
            port,
            data_dir,
            max_upload_bytes,
        })
    }
}
