//! Runtime configuration: the rate table and the access secret.
//!
//! Everything is optional. Without a file the default rates apply and the
//! secret must come from the command line or environment.

use crate::domain::rates::RateTable;
use crate::error::{PayoutError, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub rates: RateTable,
    pub secret: Option<String>,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            PayoutError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        debug!("read config from {}", path.display());
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| PayoutError::Config(e.to_string()))
    }

    /// Picks the secret to check credentials against. An explicit value
    /// (flag or environment) takes precedence over the file.
    pub fn resolve_secret(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .or(self.secret.as_deref())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| PayoutError::Config("no access secret configured".to_string()))
    }
}
