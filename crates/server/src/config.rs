//! Service configuration.
//!
//! Everything the service needs is passed in explicitly; binaries may build
//! it from the environment with [`ServiceConfig::from_env`].

use std::path::{Path, PathBuf};

/// Environment variable naming the award list file
pub const CSV_PATH_ENV: &str = "AWARDS_CSV_PATH";

/// Award list location used when nothing else is configured
pub const DEFAULT_CSV_PATH: &str = "data/movielist.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Path of the `;`-delimited award list
    pub csv_path: PathBuf,
}

impl ServiceConfig {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }

    /// Read the configuration from `AWARDS_CSV_PATH`, falling back to
    /// `data/movielist.csv`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let csv_path = lookup(CSV_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CSV_PATH.to_string());
        Self::new(csv_path)
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CSV_PATH)
    }
}
