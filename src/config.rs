//! Runtime configuration read from the environment.
//!
//! The web renderer has no process environment, so every value falls back to its default there.

use std::env;

use tracing::Level;

use crate::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

#[cfg(target_arch = "wasm32")]
pub const DEFAULT_DATASET_LOCATION: &str = "/sample-data.json";
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_DATASET_LOCATION: &str = "public/sample-data.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// File path (desktop) or URL (web) of the dataset document.
    pub dataset_location: String,
    pub initial_page_size: usize,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_location: DEFAULT_DATASET_LOCATION.to_string(),
            initial_page_size: DEFAULT_PAGE_SIZE,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, ignoring values that do not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            dataset_location: non_empty("GRID_DATASET").unwrap_or(defaults.dataset_location),
            initial_page_size: non_empty("GRID_PAGE_SIZE")
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
                .unwrap_or(defaults.initial_page_size),
            log_level: non_empty("GRID_LOG")
                .and_then(|v| v.parse::<Level>().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
