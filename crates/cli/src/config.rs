//! Runtime configuration loaded from environment variables.
//!
//! - `WEDPLAN_DATA_FILE` - JSON data file (default: `data/weddings.json`)
//! - `RUST_LOG` - log filter (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use wedplan_observability::LogFormat;

const DEFAULT_DATA_FILE: &str = "data/weddings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_file = lookup("WEDPLAN_DATA_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let log_format = lookup("LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>().map_err(|e| anyhow!(e)))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            data_file,
            log_filter,
            log_format,
        })
    }
}
