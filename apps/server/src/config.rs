//! Server configuration.
//!
//! Loaded from environment variables with fallback to defaults. The mirror
//! settings are optional; leaving them unset degrades cloud mirror calls to
//! authentication failures without affecting the rest of the API.

use std::env;
use std::path::PathBuf;

use stocktrack_sync::MirrorConfig;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP port.
    pub port: u16,

    /// Directory holding the two table files.
    pub data_dir: PathBuf,

    /// Remote spreadsheet identifier (mirror only).
    pub spreadsheet_id: Option<String>,

    /// Path to the service-account credential file (mirror only).
    pub credentials_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = AppConfig {
            port: env::var("STOCKTRACK_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCKTRACK_PORT".to_string()))?,

            data_dir: env::var("STOCKTRACK_DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),

            spreadsheet_id: env::var("STOCKTRACK_SPREADSHEET_ID").ok(),

            credentials_file: env::var("STOCKTRACK_CREDENTIALS_FILE").ok().map(PathBuf::from),
        };

        Ok(config)
    }

    /// The cloud mirror settings carried by this configuration.
    pub fn mirror_config(&self) -> MirrorConfig {
        MirrorConfig::new(self.spreadsheet_id.clone(), self.credentials_file.clone())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
