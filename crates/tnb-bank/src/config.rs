use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tnb_bank_signing_core::{BankAddress, BankRecord, Protocol};

use crate::theme::StyleSheet;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "TNB_BANK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub toast_duration_ms: u64,
    /// Custom class applied to the tile, used to look up style overrides.
    pub tile_class_name: Option<String>,
    pub active_bank: Option<BankAddress>,
    pub banks: Vec<BankRecord>,
    pub style_overrides: StyleSheet,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 720.0,
            window_height: 520.0,
            toast_duration_ms: 3_000,
            tile_class_name: None,
            active_bank: None,
            banks: vec![
                BankRecord {
                    nickname: "Primary bank".to_owned(),
                    ip_address: "54.183.16.194".to_owned(),
                    port: 80,
                    protocol: Protocol::Http,
                    account_number:
                        "0cdd4ba04456ca169baca3d66eace869520c62fe84421329086e03d91a68acdb"
                            .to_owned(),
                    node_identifier:
                        "59479a31c3b91d96bb7a0b3e07f18d4bf301f1bb0bde05f8d36d9611dcbe7cbf"
                            .to_owned(),
                    account_signing_key: None,
                    node_signing_key: None,
                },
                BankRecord {
                    nickname: "Backup bank".to_owned(),
                    ip_address: "143.110.137.54".to_owned(),
                    port: 80,
                    protocol: Protocol::Http,
                    account_number:
                        "9bfa37627e2dba0ae48165b219e76ceaba036b3db8e84108af73a1cce01fad35"
                            .to_owned(),
                    node_identifier:
                        "6dbaff44058e630cb375955c82b0d3bd7bc7e20cad93e74909a8951f747fb8a4"
                            .to_owned(),
                    account_signing_key: Some(
                        "e5e2a96b4a3c1ab4fbd0d1ab0a1e2cf3e1d7ac1c4e3a3b2fd1a1d8c6f0e4d2b1"
                            .to_owned(),
                    ),
                    node_signing_key: Some(
                        "7d2e9a1f0c5b3e8d4a6f2c1b9e0d8a7c5f3e1b2d4c6a8e0f9b7d5c3a1e2f4b6d"
                            .to_owned(),
                    ),
                },
            ],
            style_overrides: StyleSheet::default(),
        }
    }
}

impl AppConfig {
    /// Loads the file named by [`CONFIG_ENV`], or defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
